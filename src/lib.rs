pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ConfigurationError, GeometryError, Result, TrilatError};
pub use geometry::{Circle, CirclePair};
pub use math::arc_2d::{
    central_angle, central_angle_from_chord, project_to_circumference, segment_area,
    segment_area_from_angle,
};
pub use math::intersect_2d::{intersect_circles, CircleIntersection, PairIntersections};
pub use math::polygon_2d::triangle_area;
pub use math::Point2;
pub use operations::{
    overlap_area, select_triangle_vertices, OverlapParams, OverlapResult,
    SelectTriangleVertices, TrilaterationOverlap, VertexAssignment,
};
