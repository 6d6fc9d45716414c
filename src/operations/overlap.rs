use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::Circle;
use crate::math::arc_2d::{central_angle, segment_area_from_angle};
use crate::math::polygon_2d::{orientation_2d, triangle_area};

use super::vertices::{Chord, SelectTriangleVertices, VertexAssignment};
use super::OverlapParams;

/// Area of the region common to three circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapResult {
    /// Straight-edged triangle between the three vertices.
    pub triangle_area: f64,
    /// Sum of the three circular segments bulging out of the triangle.
    pub segment_area: f64,
    /// `triangle_area + segment_area`.
    pub total_area: f64,
    /// Segment area contributed by each circle, indexed like the circles.
    pub segment_areas: [f64; 3],
    /// The curvilinear-triangle vertices the areas were computed from.
    pub vertices: VertexAssignment,
}

/// Computes the exact overlap area of three circles.
///
/// The overlap of three discs that meet in the generic way is a curvilinear
/// triangle: the straight triangle through its vertices plus, on each edge,
/// the segment of the circle whose arc bounds that edge.
pub struct TrilaterationOverlap {
    circles: [Circle; 3],
    params: OverlapParams,
}

impl TrilaterationOverlap {
    /// Creates a new `TrilaterationOverlap` operation with default tolerances.
    #[must_use]
    pub fn new(circles: [Circle; 3]) -> Self {
        Self {
            circles,
            params: OverlapParams::default(),
        }
    }

    /// Sets custom tolerances.
    #[must_use]
    pub fn with_params(mut self, params: OverlapParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the computation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the circles do not bound a curvilinear
    /// triangle, or `GeometryError` for degenerate input.
    pub fn execute(&self) -> Result<OverlapResult> {
        let vertices = SelectTriangleVertices::new(self.circles)
            .with_params(self.params)
            .execute()?;

        let triangle_area = triangle_area(&vertices.triangle());

        let mut segment_areas = [0.0; 3];
        for ((circle, chord), area) in self
            .circles
            .iter()
            .zip(vertices.chords())
            .zip(segment_areas.iter_mut())
        {
            *area = bulge_area(circle, &chord)?;
        }
        let segment_area: f64 = segment_areas.iter().sum();
        let total_area = triangle_area + segment_area;

        tracing::debug!(
            triangle_area,
            segment_area,
            total_area,
            ?segment_areas,
            "computed overlap area"
        );

        Ok(OverlapResult {
            triangle_area,
            segment_area,
            total_area,
            segment_areas,
            vertices,
        })
    }
}

/// Segment of `circle` on the far side of `chord` from the triangle.
///
/// When the center lies on that far side too, the arc spans more than half
/// the circle and the major segment is taken.
fn bulge_area(circle: &Circle, chord: &Chord) -> Result<f64> {
    let theta = central_angle(circle, &chord.start, &chord.end)?;
    let apex_side = orientation_2d(&chord.start, &chord.end, &chord.apex);
    let center_side = orientation_2d(&chord.start, &chord.end, circle.center());
    let theta = if apex_side * center_side < 0.0 {
        TAU - theta
    } else {
        theta
    };
    segment_area_from_angle(circle, theta)
}

/// Overlap area of three circles with default tolerances.
///
/// # Errors
///
/// See [`TrilaterationOverlap::execute`].
pub fn overlap_area(circles: &[Circle; 3]) -> Result<OverlapResult> {
    TrilaterationOverlap::new(*circles).execute()
}
