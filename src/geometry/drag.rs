//! Drag delta handling for resize gestures.
//!
//! `move_delta`, `current` and `opposite` must all be expressed in the same
//! screen frame; no conversion happens here.

use crate::geometry::transform::Angle;
use crate::geometry::types::{HandleId, Point, SineCosine};

/// Sine/cosine basis for dragging `handle` on a box rotated by `angle_degrees`.
///
/// The top-right, top-middle, bottom-left and bottom-middle handles drag along
/// mirrored axes, so they get the basis of the negated angle.
///
/// # Arguments
/// * `handle` - The handle being dragged
/// * `angle_degrees` - Box rotation, clockwise positive
///
/// # Returns
/// Sine and cosine of the (possibly negated) angle
pub fn orientation_factors(handle: HandleId, angle_degrees: f64) -> SineCosine {
    let angle = match handle {
        HandleId::TopRight
        | HandleId::TopMiddle
        | HandleId::BottomLeft
        | HandleId::BottomMiddle => -angle_degrees,
        HandleId::TopLeft
        | HandleId::MiddleLeft
        | HandleId::BottomRight
        | HandleId::MiddleRight => angle_degrees,
    };
    SineCosine::from_radians(Angle::Degrees(angle).radians())
}

/// New position of the dragged point after the pointer moved by `move_delta`.
///
/// `opposite` is the fixed point captured at gesture start and `current` the
/// dragged handle's position.
///
/// # Arguments
/// * `handle` - The handle being dragged
/// * `opposite` - Fixed point from [`crate::geometry::opposite_point`]
/// * `current` - Dragged point from [`crate::geometry::active_point`]
/// * `move_delta` - Pointer movement since gesture start
///
/// # Returns
/// The new position of the dragged point
pub fn project_drag(handle: HandleId, opposite: Point, current: Point, move_delta: Point) -> Point {
    match handle {
        HandleId::TopLeft => Point {
            x: opposite.x - (move_delta.x + current.x),
            y: opposite.y - (move_delta.y + current.y),
        },
        HandleId::MiddleLeft => Point {
            x: opposite.x - move_delta.x - current.x,
            y: opposite.y - move_delta.y - current.y,
        },
        HandleId::TopRight | HandleId::TopMiddle => Point {
            x: current.x + (move_delta.x - opposite.x),
            y: opposite.y - (move_delta.y + current.y),
        },
        HandleId::MiddleRight | HandleId::BottomRight => Point {
            x: current.x + (move_delta.x - opposite.x),
            y: current.y + (move_delta.y - opposite.y),
        },
        HandleId::BottomLeft | HandleId::BottomMiddle => Point {
            x: opposite.x - (move_delta.x + current.x),
            y: current.y + (move_delta.y - opposite.y),
        },
    }
}
