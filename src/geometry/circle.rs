use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A circle in the plane, given by its center and radius.
///
/// In a trilateration setup the center is an anchor position and the radius
/// the measured range to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the radius is not a positive
    /// finite number or the center is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "circle radius must be positive and finite, got {radius}"
            ))
            .into());
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "circle center must be finite, got ({}, {})",
                center.x, center.y
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle from an `(x, y, radius)` triple.
    ///
    /// # Errors
    ///
    /// Same as [`Circle::new`].
    pub fn from_xyr(x: f64, y: f64, radius: f64) -> Result<Self> {
        Self::new(Point2::new(x, y), radius)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Area of the full disc.
    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Whether `point` lies inside or on the circle.
    ///
    /// `rel_tol` widens the test to `|p - c|^2 <= r^2 * (1 + rel_tol)` so that
    /// computed boundary points are admitted.
    #[must_use]
    pub fn contains(&self, point: &Point2, rel_tol: f64) -> bool {
        let r_sq = self.radius * self.radius;
        (*point - self.center).norm_squared() <= r_sq * (1.0 + rel_tol)
    }

    /// Whether `point` lies on the circumference within `rel_tol` of `r^2`.
    #[must_use]
    pub fn is_on_circumference(&self, point: &Point2, rel_tol: f64) -> bool {
        let r_sq = self.radius * self.radius;
        ((*point - self.center).norm_squared() - r_sq).abs() <= r_sq * rel_tol
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn accessors() {
        let c = Circle::from_xyr(1.0, 2.0, 3.0).unwrap();
        assert_eq!(*c.center(), Point2::new(1.0, 2.0));
        assert_relative_eq!(c.radius(), 3.0);
        assert_relative_eq!(c.area(), 9.0 * PI);
    }

    #[test]
    fn invalid_radius() {
        assert!(Circle::from_xyr(0.0, 0.0, 0.0).is_err());
        assert!(Circle::from_xyr(0.0, 0.0, -1.0).is_err());
        assert!(Circle::from_xyr(0.0, 0.0, f64::NAN).is_err());
        assert!(Circle::from_xyr(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn invalid_center() {
        let err = Circle::from_xyr(f64::NAN, 0.0, 1.0).unwrap_err();
        assert!(err.is_degenerate_input());
    }

    #[test]
    fn contains_interior_and_boundary() {
        let c = Circle::from_xyr(0.0, 0.0, 10.0).unwrap();
        assert!(c.contains(&Point2::new(3.0, 4.0), 0.0));
        assert!(c.contains(&Point2::new(6.0, 8.0), 0.0));
        assert!(!c.contains(&Point2::new(6.0, 8.1), 1e-9));
    }

    #[test]
    fn contains_admits_boundary_drift() {
        let c = Circle::from_xyr(0.0, 0.0, 10.0).unwrap();
        let drifted = Point2::new(10.0 + 1e-12, 0.0);
        assert!(!c.contains(&drifted, 0.0));
        assert!(c.contains(&drifted, 1e-9));
    }

    #[test]
    fn on_circumference() {
        let c = Circle::from_xyr(0.0, 70.0, 100.0).unwrap();
        assert!(c.is_on_circumference(&Point2::new(100.0, 70.0), 1e-5));
        assert!(c.is_on_circumference(&Point2::new(35.0, 70.0 + 93.674_969_975_975_97), 1e-5));
        assert!(!c.is_on_circumference(&Point2::new(35.0, 93.674_969_975_975_97), 1e-5));
    }
}
