use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};
use crate::geometry::{Circle, CirclePair};

/// Default relative tolerance for separation and tangency tests.
pub const DEFAULT_TANGENCY_TOLERANCE: f64 = 1e-12;

/// Intersection of two circle boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    /// The circles are apart, nested without touching, or coincident.
    None,
    /// The circles touch at a single point.
    Tangent(Point2),
    /// The circles cross at two points.
    Crossing(Point2, Point2),
}

impl CircleIntersection {
    /// Returns the intersection points (0, 1, or 2).
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match *self {
            Self::None => Vec::new(),
            Self::Tangent(p) => vec![p],
            Self::Crossing(p1, p2) => vec![p1, p2],
        }
    }

    /// Number of intersection points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Tangent(_) => 1,
            Self::Crossing(..) => 2,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Closed-form intersection of two circles.
///
/// Returns [`CircleIntersection::None`] when the circles are apart, when one
/// lies strictly inside the other, or when they coincide.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` for concentric circles with different radii.
pub fn intersect_circles(c1: &Circle, c2: &Circle) -> Result<CircleIntersection> {
    intersect_circles_with_tolerance(c1, c2, DEFAULT_TANGENCY_TOLERANCE)
}

/// Same as [`intersect_circles`] with an explicit relative tolerance.
///
/// `rel_tol` is scaled by `r1 + r2` and absorbs rounding on tangent input.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` for concentric circles with different radii.
pub fn intersect_circles_with_tolerance(
    c1: &Circle,
    c2: &Circle,
    rel_tol: f64,
) -> Result<CircleIntersection> {
    let r1 = c1.radius();
    let r2 = c2.radius();
    let delta = *c2.center() - *c1.center();
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();
    let eps = rel_tol * (r1 + r2);

    let outer = r1 + r2;
    let inner = (r1 - r2).abs();

    if dist <= eps && inner <= eps {
        // Coincident: infinitely many shared points, none isolated.
        return Ok(CircleIntersection::None);
    }
    if dist_sq == 0.0 {
        return Err(GeometryError::Degenerate(format!(
            "concentric circles at ({}, {}) with radii {r1} and {r2}",
            c1.center().x,
            c1.center().y
        ))
        .into());
    }

    if dist > outer + eps || dist < inner - eps {
        return Ok(CircleIntersection::None);
    }

    // Distance from c1 along c1->c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;

    let mid = *c1.center() + delta * (a / dist);
    // Near tangency h_sq is rounding noise; decide on the center distance.
    if dist >= outer - eps || dist <= inner + eps || h_sq <= eps * outer {
        return Ok(CircleIntersection::Tangent(mid));
    }
    let h = h_sq.sqrt();

    // Perpendicular to c1->c2, pointing right of the center line.
    let offset = Vector2::new(delta.y, -delta.x) * (h / dist);
    Ok(CircleIntersection::Crossing(mid + offset, mid - offset))
}

/// Intersections of the three circle pairs of a trilateration setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairIntersections([CircleIntersection; 3]);

impl PairIntersections {
    /// Intersects every pair of `circles`.
    ///
    /// # Errors
    ///
    /// Propagates `GeometryError::Degenerate` from any concentric pair.
    pub fn compute(circles: &[Circle; 3], rel_tol: f64) -> Result<Self> {
        let mut sets = [CircleIntersection::None; 3];
        for pair in CirclePair::ALL {
            let (i, j) = pair.indices();
            sets[pair.index()] = intersect_circles_with_tolerance(&circles[i], &circles[j], rel_tol)?;
        }
        Ok(Self(sets))
    }

    /// Returns the intersection of one pair.
    #[must_use]
    pub fn get(&self, pair: CirclePair) -> &CircleIntersection {
        &self.0[pair.index()]
    }

    /// All intersection points tagged with the pair that produced them.
    pub fn candidates(&self) -> impl Iterator<Item = (CirclePair, Point2)> + '_ {
        CirclePair::ALL
            .into_iter()
            .flat_map(move |pair| self.get(pair).points().into_iter().map(move |p| (pair, p)))
    }
}
