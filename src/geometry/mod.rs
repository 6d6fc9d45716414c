mod circle;
mod pair;

pub use circle::Circle;
pub use pair::CirclePair;
