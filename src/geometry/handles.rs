//! Rotated positions of the eight resize handles.
//!
//! Each locator places its handle on the scaled, unrotated rectangle whose
//! top-left is `(state.x, state.y)` and then rotates it by `state.angle`
//! around [`BoxState::resolved_center`].

use tracing::trace;

use crate::geometry::transform::RotationTransform;
use crate::geometry::types::{BoxState, HandleId, Point};

/// Position of `handle` on the scaled box before rotation.
///
/// # Arguments
/// * `handle` - The handle to place
/// * `state` - Box geometry; only origin, size and scale are read
///
/// # Returns
/// The handle's point in the box's unrotated frame
pub fn unrotated_point(handle: HandleId, state: &BoxState) -> Point {
    let (x, y) = (state.x, state.y);
    let (w, h) = (state.scaled_width(), state.scaled_height());
    match handle {
        HandleId::TopLeft => Point::new(x, y),
        HandleId::TopRight => Point::new(x + w, y),
        HandleId::BottomLeft => Point::new(x, y + h),
        HandleId::BottomRight => Point::new(x + w, y + h),
        HandleId::TopMiddle => Point::new(x + w / 2.0, y),
        HandleId::BottomMiddle => Point::new(x + w / 2.0, y + h),
        HandleId::MiddleLeft => Point::new(x, y + h / 2.0),
        HandleId::MiddleRight => Point::new(x + w, y + h / 2.0),
    }
}

/// The rotation shared by every handle of `state`
pub fn box_rotation(state: &BoxState) -> RotationTransform {
    RotationTransform::new(state.angle, state.resolved_center())
}

/// Top-left corner
pub fn top_left(state: &BoxState) -> Point {
    handle_point(HandleId::TopLeft, state)
}

/// Top-right corner
pub fn top_right(state: &BoxState) -> Point {
    handle_point(HandleId::TopRight, state)
}

/// Bottom-left corner
pub fn bottom_left(state: &BoxState) -> Point {
    handle_point(HandleId::BottomLeft, state)
}

/// Bottom-right corner
pub fn bottom_right(state: &BoxState) -> Point {
    handle_point(HandleId::BottomRight, state)
}

/// Midpoint of the top edge
pub fn top_middle(state: &BoxState) -> Point {
    handle_point(HandleId::TopMiddle, state)
}

/// Midpoint of the bottom edge
pub fn bottom_middle(state: &BoxState) -> Point {
    handle_point(HandleId::BottomMiddle, state)
}

/// Midpoint of the left edge
pub fn middle_left(state: &BoxState) -> Point {
    handle_point(HandleId::MiddleLeft, state)
}

/// Midpoint of the right edge
pub fn middle_right(state: &BoxState) -> Point {
    handle_point(HandleId::MiddleRight, state)
}

/// Position of `handle` on the box, without any origin normalization.
///
/// # Arguments
/// * `handle` - The handle to locate
/// * `state` - Box geometry; an explicit `center` is used as the pivot
///
/// # Returns
/// The handle rotated by `state.angle` around the resolved center
pub fn handle_point(handle: HandleId, state: &BoxState) -> Point {
    let point = box_rotation(state).transform_point(unrotated_point(handle, state));
    trace!(%handle, x = point.x, y = point.y, "located handle");
    point
}

/// All eight handles, in [`HandleId::ALL`] order.
///
/// The center and rotation are computed once and shared by every handle.
pub fn handle_points(state: &BoxState) -> [(HandleId, Point); 8] {
    let rotation = box_rotation(state);
    HandleId::ALL.map(|handle| {
        (
            handle,
            rotation.transform_point(unrotated_point(handle, state)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPSILON && (actual.y - y).abs() < EPSILON,
            "expected ({}, {}), got ({}, {})",
            x,
            y,
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_unrotated_handles() {
        let b = BoxState::new(0.0, 0.0, 100.0, 50.0);
        assert_point(top_left(&b), 0.0, 0.0);
        assert_point(top_right(&b), 100.0, 0.0);
        assert_point(bottom_left(&b), 0.0, 50.0);
        assert_point(bottom_right(&b), 100.0, 50.0);
        assert_point(top_middle(&b), 50.0, 0.0);
        assert_point(bottom_middle(&b), 50.0, 50.0);
        assert_point(middle_left(&b), 0.0, 25.0);
        assert_point(middle_right(&b), 100.0, 25.0);
    }

    #[test]
    fn test_scaled_unrotated_handles() {
        let b = BoxState::new(10.0, 20.0, 100.0, 50.0).with_scale(2.0, 0.5);
        assert_point(top_left(&b), 10.0, 20.0);
        assert_point(bottom_right(&b), 210.0, 45.0);
        assert_point(top_middle(&b), 110.0, 20.0);
        assert_point(middle_right(&b), 210.0, 32.5);
    }

    #[test]
    fn test_half_turn_swaps_corners() {
        let b = BoxState::new(0.0, 0.0, 100.0, 50.0).with_angle(180.0);
        assert_point(top_left(&b), 100.0, 50.0);
        assert_point(bottom_right(&b), 0.0, 0.0);
        assert_point(top_middle(&b), 50.0, 50.0);
        assert_point(middle_left(&b), 100.0, 25.0);
    }

    #[test]
    fn test_quarter_turn() {
        // 100x50 box centered at (50, 25), rotated 90° clockwise
        let b = BoxState::new(0.0, 0.0, 100.0, 50.0).with_angle(90.0);
        assert_point(top_left(&b), 75.0, -25.0);
        assert_point(top_right(&b), 75.0, 75.0);
        assert_point(middle_right(&b), 50.0, 75.0);
    }

    #[test]
    fn test_explicit_center_is_used() {
        let b = BoxState::new(0.0, 0.0, 10.0, 10.0)
            .with_angle(90.0)
            .with_center(Point::new(0.0, 0.0));
        // (10, 0) rotated around the origin lands at (0, 10)
        assert_point(top_right(&b), 0.0, 10.0);
    }

    #[test]
    fn test_dispatch_matches_locators() {
        let b = BoxState::new(3.0, -4.0, 30.0, 12.0)
            .with_scale(1.3, 0.7)
            .with_angle(37.0);
        assert_eq!(handle_point(HandleId::TopLeft, &b), top_left(&b));
        assert_eq!(handle_point(HandleId::BottomMiddle, &b), bottom_middle(&b));
        assert_eq!(handle_point(HandleId::MiddleLeft, &b), middle_left(&b));

        for (handle, point) in handle_points(&b) {
            assert_eq!(point, handle_point(handle, &b), "{}", handle);
        }
    }

    #[test]
    fn test_unrotated_point_ignores_angle() {
        let b = BoxState::new(10.0, 20.0, 100.0, 50.0)
            .with_scale(2.0, 0.5)
            .with_angle(71.0);
        assert_eq!(unrotated_point(HandleId::BottomRight, &b), Point::new(210.0, 45.0));
        assert_eq!(unrotated_point(HandleId::MiddleLeft, &b), Point::new(10.0, 32.5));
    }

    #[test]
    fn test_shared_rotation_matches_fresh_rotation() {
        let b = BoxState::new(-4.0, 9.0, 33.0, 17.0)
            .with_scale(0.6, 1.9)
            .with_angle(-48.0);
        let rotation = box_rotation(&b);
        for handle in HandleId::ALL {
            let fresh = crate::geometry::transform::rotate(
                unrotated_point(handle, &b),
                b.resolved_center(),
                b.angle,
            );
            assert_eq!(rotation.transform_point(unrotated_point(handle, &b)), fresh);
        }
    }

    #[test]
    fn test_degenerate_box_collapses() {
        let b = BoxState::new(5.0, 5.0, 0.0, 0.0).with_angle(45.0);
        for (_, point) in handle_points(&b) {
            assert_point(point, 5.0, 5.0);
        }
    }
}
