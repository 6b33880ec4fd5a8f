//! Handle Geometry - resize/rotate handle math for scaled, rotated rectangles
//!
//! This library computes the on-screen positions of the eight resize handles
//! of a rectangle, and the opposite/active points, drag basis, drag
//! projection and bounds that an interactive resize gesture needs.
//!
//! Angles are in degrees, clockwise positive on a Y-down screen.
//!
//! # Example
//!
//! ```rust
//! use handle_geometry::{bounds, handle_point, BoxState, HandleId};
//!
//! let state = BoxState::new(0.0, 0.0, 100.0, 50.0);
//! let br = handle_point(HandleId::BottomRight, &state);
//! assert_eq!((br.x, br.y), (100.0, 50.0));
//! assert_eq!(bounds(&state).xmax, 100.0);
//! ```

pub mod config;
pub mod error;
pub mod geometry;

pub use config::BoxFileError;
pub use error::HandleError;
pub use geometry::{
    active_point, bounds, center, handle_point, handle_points, opposite_point,
    orientation_factors, project_drag, rotate, Angle, BoxState, Bounds, HandleId, Point,
    ResizeGesture, RotationTransform, SineCosine,
};

/// Opposite point for a handle given by its token (`"tl"`, `"mr"`, ...)
///
/// # Example
///
/// ```rust
/// use handle_geometry::{opposite, BoxState};
///
/// let state = BoxState::new(0.0, 0.0, 100.0, 50.0);
/// let p = opposite("tl", &state).unwrap();
/// assert_eq!((p.x, p.y), (100.0, 50.0));
/// assert!(opposite("zz", &state).is_err());
/// ```
pub fn opposite(handle: &str, state: &BoxState) -> Result<Point, HandleError> {
    Ok(opposite_point(handle.parse()?, state))
}

/// Active point for a handle given by its token
pub fn locate(handle: &str, state: &BoxState) -> Result<Point, HandleError> {
    Ok(active_point(handle.parse()?, state))
}

/// Drag basis for a handle given by its token
pub fn factors(handle: &str, angle_degrees: f64) -> Result<SineCosine, HandleError> {
    Ok(orientation_factors(handle.parse()?, angle_degrees))
}

/// Drag projection for a handle given by its token
pub fn project(
    handle: &str,
    opposite: Point,
    current: Point,
    move_delta: Point,
) -> Result<Point, HandleError> {
    Ok(project_drag(handle.parse()?, opposite, current, move_delta))
}
