//! Circular segment math.
//!
//! A segment is the region between a chord and the arc it subtends. For a
//! central angle `theta` its area is `r^2 / 2 * (theta - sin(theta))`.

use std::f64::consts::TAU;

use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};
use crate::geometry::Circle;

/// Moves `point` radially onto the circumference of `circle`.
///
/// Cancels the drift left by intersection arithmetic; a point already on the
/// circle comes back unchanged up to rounding.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `point` coincides with the center.
pub fn project_to_circumference(circle: &Circle, point: &Point2) -> Result<Point2> {
    let v = *point - *circle.center();
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(*circle.center() + v * (circle.radius() / len))
}

/// Central angle subtended by the chord `p1 -> p2`, in `[0, pi]`.
///
/// Both endpoints are projected onto the circle first.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either point coincides with the center.
pub fn central_angle(circle: &Circle, p1: &Point2, p2: &Point2) -> Result<f64> {
    let v1 = project_to_circumference(circle, p1)? - *circle.center();
    let v2 = project_to_circumference(circle, p2)? - *circle.center();
    let cos = (v1.dot(&v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Central angle subtended by a chord of the given length, in `[0, pi]`.
///
/// Lengths beyond the diameter clamp to `pi`.
#[must_use]
pub fn central_angle_from_chord(circle: &Circle, chord_length: f64) -> f64 {
    let half = (chord_length / (2.0 * circle.radius())).clamp(0.0, 1.0);
    2.0 * half.asin()
}

/// Area of the minor segment of `circle` cut off by the chord `p1 -> p2`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either point coincides with the center.
pub fn segment_area(circle: &Circle, p1: &Point2, p2: &Point2) -> Result<f64> {
    let theta = central_angle(circle, p1, p2)?;
    Ok(segment_area_unchecked(circle.radius(), theta))
}

/// Area of the segment of `circle` with central angle `theta` (radians).
///
/// # Errors
///
/// Returns `GeometryError::InvalidAngle` if `theta` is negative, not finite,
/// or larger than `2*pi`.
pub fn segment_area_from_angle(circle: &Circle, theta: f64) -> Result<f64> {
    if !theta.is_finite() || !(0.0..=TAU).contains(&theta) {
        return Err(GeometryError::InvalidAngle { angle: theta }.into());
    }
    Ok(segment_area_unchecked(circle.radius(), theta))
}

fn segment_area_unchecked(radius: f64, theta: f64) -> f64 {
    0.5 * radius * radius * (theta - theta.sin())
}
