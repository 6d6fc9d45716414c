mod overlap;
mod vertices;

pub use overlap::{overlap_area, OverlapResult, TrilaterationOverlap};
pub use vertices::{select_triangle_vertices, Chord, SelectTriangleVertices, VertexAssignment};

use crate::math::intersect_2d::DEFAULT_TANGENCY_TOLERANCE;

/// Tolerances controlling the overlap computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapParams {
    /// Relative slack in the point-in-circle test, so that intersection
    /// points sitting on a third circle's boundary still count as inside.
    pub containment_tolerance: f64,
    /// Relative slack, scaled by `r1 + r2`, for separation and tangency tests.
    pub tangency_tolerance: f64,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            containment_tolerance: 1e-9,
            tangency_tolerance: DEFAULT_TANGENCY_TOLERANCE,
        }
    }
}
