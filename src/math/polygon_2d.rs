use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned area of the straight-edged triangle through three vertices.
///
/// Collinear vertices give zero.
#[must_use]
pub fn triangle_area(vertices: &[Point2; 3]) -> f64 {
    signed_area_2d(vertices).abs()
}

/// Returns which side of the directed line `a -> b` the point `p` lies on.
///
/// Positive on the left, negative on the right, zero on the line.
#[must_use]
pub fn orientation_2d(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}
