//! Point rotation around a pivot.
//!
//! ## Rotation Convention
//!
//! All angles follow the screen convention used throughout the crate: the Y
//! axis points down and a positive angle rotates clockwise on screen, in
//! degrees unless given as [`Angle::Radians`].
//! - 0° = no rotation
//! - 90° = rotated clockwise (right becomes down)
//! - 180° = upside down
//! - 270° = rotated counter-clockwise (right becomes up)
//!
//! [`crate::geometry::drag::orientation_factors`] uses the same sense, so a
//! handle's drag basis always agrees with where its point was rotated to.

use crate::geometry::types::Point;

/// A rotation amount, either in degrees or already converted to radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Degrees(f64),
    Radians(f64),
}

impl Angle {
    pub fn radians(self) -> f64 {
        match self {
            Angle::Degrees(deg) => deg.to_radians(),
            Angle::Radians(rad) => rad,
        }
    }
}

impl From<f64> for Angle {
    fn from(degrees: f64) -> Self {
        Angle::Degrees(degrees)
    }
}

/// A 2D rotation around a center point.
///
/// Sine and cosine are computed once so the same transform can be applied to
/// several points (e.g. the four corners when computing bounds).
#[derive(Debug, Clone, Copy)]
pub struct RotationTransform {
    /// Center point of rotation
    pub center: Point,
    sin: f64,
    cos: f64,
}

impl RotationTransform {
    /// Create a new rotation transform.
    ///
    /// # Arguments
    /// * `angle` - Rotation amount (clockwise positive)
    /// * `center` - Center point of rotation
    pub fn new(angle: impl Into<Angle>, center: Point) -> Self {
        let (sin, cos) = angle.into().radians().sin_cos();
        Self { center, sin, cos }
    }

    /// Rotate a point around the center using the standard 2D rotation matrix:
    /// ```text
    /// x' = (x - cx) * cos(θ) - (y - cy) * sin(θ) + cx
    /// y' = (x - cx) * sin(θ) + (y - cy) * cos(θ) + cy
    /// ```
    pub fn transform_point(&self, point: Point) -> Point {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;

        Point {
            x: dx * self.cos - dy * self.sin + self.center.x,
            y: dx * self.sin + dy * self.cos + self.center.y,
        }
    }
}

/// Rotate `point` around `center`.
///
/// Total over finite inputs; the center is always a fixed point.
///
/// # Arguments
/// * `point` - The point to rotate
/// * `center` - Pivot of the rotation
/// * `angle` - Degrees (a plain `f64`) or a precomputed [`Angle::Radians`]
///
/// # Returns
/// The rotated point
pub fn rotate(point: Point, center: Point, angle: impl Into<Angle>) -> Point {
    RotationTransform::new(angle, center).transform_point(point)
}
