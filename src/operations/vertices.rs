use crate::error::{ConfigurationError, Result};
use crate::geometry::{Circle, CirclePair};
use crate::math::intersect_2d::PairIntersections;
use crate::math::Point2;

use super::OverlapParams;

/// A circle's chord across the curvilinear triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    /// Vertex contributed by the first pair involving the circle.
    pub start: Point2,
    /// Vertex contributed by the second pair involving the circle.
    pub end: Point2,
    /// The remaining triangle vertex, on the inner side of the chord.
    pub apex: Point2,
}

/// The three vertices of a curvilinear triangle, keyed by the circle pair
/// whose intersection produced each one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAssignment {
    vertices: [Point2; 3],
}

impl VertexAssignment {
    /// Vertex contributed by `pair`.
    #[must_use]
    pub fn vertex(&self, pair: CirclePair) -> Point2 {
        self.vertices[pair.index()]
    }

    /// Vertices in the order AB, BC, AC.
    #[must_use]
    pub fn triangle(&self) -> [Point2; 3] {
        self.vertices
    }

    /// Chord of every circle, indexed like the circles.
    ///
    /// Circle A spans the AB and AC vertices, B spans AB and BC, C spans BC and AC.
    #[must_use]
    pub fn chords(&self) -> [Chord; 3] {
        // The vertex of the pair that leaves a circle out sits across its chord.
        let mut apexes = [Point2::origin(); 3];
        for (pair, vertex) in self.iter() {
            apexes[pair.third()] = vertex;
        }
        std::array::from_fn(|circle| {
            let [first, second] = CirclePair::CHORDS[circle];
            Chord {
                start: self.vertex(first),
                end: self.vertex(second),
                apex: apexes[circle],
            }
        })
    }

    /// Iterates `(pair, vertex)` in triangle order.
    pub fn iter(&self) -> impl Iterator<Item = (CirclePair, Point2)> + '_ {
        CirclePair::ALL.into_iter().map(|pair| (pair, self.vertex(pair)))
    }
}

/// Finds the vertices of the curvilinear triangle bounded by three circles.
///
/// Every pairwise intersection point is tested against all three circles.
/// Exactly three must pass, one from each pair; anything else means the
/// circles do not jointly overlap in the generic way and is reported as an
/// error rather than guessed at.
pub struct SelectTriangleVertices {
    circles: [Circle; 3],
    params: OverlapParams,
}

impl SelectTriangleVertices {
    /// Creates a new `SelectTriangleVertices` operation with default tolerances.
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

    /// Executes the selection.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the number of qualifying points is not
    /// three or one pair contributes more than one, and `GeometryError::Degenerate`
    /// for concentric circles with different radii.
    pub fn execute(&self) -> Result<VertexAssignment> {
        let sets = PairIntersections::compute(&self.circles, self.params.tangency_tolerance)?;
        let tol = self.params.containment_tolerance;

        let inside: Vec<(CirclePair, Point2)> = sets
            .candidates()
            .filter(|(_, p)| self.circles.iter().all(|c| c.contains(p, tol)))
            .collect();
        tracing::debug!(
            candidates = sets.candidates().count(),
            inside = inside.len(),
            "filtered vertex candidates"
        );

        if inside.len() != 3 {
            return Err(ConfigurationError::VertexCount {
                found: inside.len(),
            }
            .into());
        }

        let mut slots: [Option<Point2>; 3] = [None; 3];
        for (pair, point) in inside {
            let slot = &mut slots[pair.index()];
            if slot.is_some() {
                return Err(ConfigurationError::DuplicatePairVertex { pair }.into());
            }
            *slot = Some(point);
        }

        let mut vertices = [Point2::origin(); 3];
        for pair in CirclePair::ALL {
            vertices[pair.index()] =
                slots[pair.index()].ok_or(ConfigurationError::MissingPairVertex { pair })?;
        }
        tracing::trace!(?vertices, "selected triangle vertices");

        Ok(VertexAssignment { vertices })
    }
}

/// Selects the curvilinear-triangle vertices with default tolerances.
///
/// # Errors
///
/// See [`SelectTriangleVertices::execute`].
pub fn select_triangle_vertices(circles: &[Circle; 3]) -> Result<VertexAssignment> {
    SelectTriangleVertices::new(*circles).execute()
}
