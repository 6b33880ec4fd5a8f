//! Values captured once at the start of a resize gesture

use crate::geometry::drag::{orientation_factors, project_drag};
use crate::geometry::resolve::{active_point, opposite_point};
use crate::geometry::types::{BoxState, HandleId, Point, SineCosine};

/// Everything a drag controller needs to reuse across move events.
///
/// Created at pointer-down from the handle and the box as it was then; each
/// move event calls [`ResizeGesture::project`] with the accumulated delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    pub handle: HandleId,
    /// Point that stays fixed during the drag
    pub opposite: Point,
    /// Dragged point at gesture start (the center in scale-from-center mode)
    pub active: Point,
    pub factors: SineCosine,
}

impl ResizeGesture {
    pub fn begin(handle: HandleId, state: &BoxState) -> Self {
        Self {
            handle,
            opposite: opposite_point(handle, state),
            active: active_point(handle, state),
            factors: orientation_factors(handle, state.angle),
        }
    }

    /// Dragged point for a pointer that moved `move_delta` since gesture start
    pub fn project(&self, move_delta: Point) -> Point {
        project_drag(self.handle, self.opposite, self.active, move_delta)
    }

    /// `move_delta` expressed along the handle's drag axes
    pub fn oriented_delta(&self, move_delta: Point) -> Point {
        self.factors.rotate_delta(move_delta)
    }
}
