//! Handle resolution at the start of a resize gesture.
//!
//! Callers report the box origin after scale growth has been applied, so both
//! resolvers first derive the center from the reported box (unless one was
//! supplied), then shift the origin back to its unscaled position before
//! locating the handle.
//!
//! Because of that shift, `opposite_point(h.opposite(), box)` equals
//! `handle_point(h, box)` only when the scale is 1; for scaled boxes it
//! equals the handle of the box with its origin normalized.

use tracing::trace;

use crate::geometry::handles::handle_point;
use crate::geometry::types::{BoxState, HandleId, Point};

fn normalized(state: &BoxState) -> BoxState {
    let center = state.resolved_center();
    state.with_center(center).with_unscaled_origin()
}

/// Position of the handle that stays fixed while `handle` is dragged.
///
/// # Arguments
/// * `handle` - The handle being dragged
/// * `state` - Box geometry with the origin as reported by the caller
///
/// # Returns
/// The rotated position of `handle.opposite()` on the normalized box
pub fn opposite_point(handle: HandleId, state: &BoxState) -> Point {
    let opposite = handle.opposite();
    trace!(%handle, %opposite, "resolving opposite handle");
    handle_point(opposite, &normalized(state))
}

/// Position of the dragged handle itself.
///
/// In scale-from-center mode the anchor is the center, so that is returned
/// regardless of `handle`.
///
/// # Arguments
/// * `handle` - The handle being dragged
/// * `state` - Box geometry with the origin as reported by the caller
///
/// # Returns
/// The rotated position of `handle` on the normalized box, or the center
pub fn active_point(handle: HandleId, state: &BoxState) -> Point {
    if state.scale_from_center {
        trace!(%handle, "scale from center, anchoring at center");
        return state.resolved_center();
    }
    handle_point(handle, &normalized(state))
}
