//! Center of a scaled rectangle

use crate::geometry::types::{BoxState, Point};

/// Compute the center of a scaled box from its unscaled origin and size.
///
/// The growth from scaling (`size * scale - size`) is subtracted from the
/// origin before adding half the scaled size. Any `center` already stored on
/// the box is ignored; use [`BoxState::resolved_center`] to honour it.
pub fn center(state: &BoxState) -> Point {
    let changed_width = state.scaled_width();
    let changed_height = state.scaled_height();

    Point {
        x: state.x - (changed_width - state.width) + changed_width / 2.0,
        y: state.y - (changed_height - state.height) + changed_height / 2.0,
    }
}

/// Recover the unscaled origin coordinate from a reported one.
///
/// Works per axis: pass `x`, `width`, `scale_x` or `y`, `height`, `scale_y`.
pub fn original_position_from_scale(position: f64, size: f64, scale: f64) -> f64 {
    position - (size * scale - size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_center() {
        let c = center(&BoxState::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(c, Point::new(50.0, 25.0));
    }

    #[test]
    fn test_center_ignores_angle() {
        let b = BoxState::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(center(&b), center(&b.with_angle(123.0)));
    }

    #[test]
    fn test_scaled_center() {
        // width 100 * 2 = 200, growth 100: 0 - 100 + 100 = 0
        // height 50 * 3 = 150, growth 100: 0 - 100 + 75 = -25
        let c = center(&BoxState::new(0.0, 0.0, 100.0, 50.0).with_scale(2.0, 3.0));
        assert_eq!(c, Point::new(0.0, -25.0));
    }

    #[test]
    fn test_center_ignores_explicit_center() {
        let b = BoxState::new(0.0, 0.0, 10.0, 10.0).with_center(Point::new(99.0, 99.0));
        assert_eq!(center(&b), Point::new(5.0, 5.0));
        assert_eq!(b.resolved_center(), Point::new(99.0, 99.0));
    }

    #[test]
    fn test_zero_scale_collapses() {
        let c = center(&BoxState::new(0.0, 0.0, 100.0, 50.0).with_scale(0.0, 0.0));
        assert_eq!(c, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_original_position_from_scale() {
        assert_eq!(original_position_from_scale(10.0, 100.0, 1.0), 10.0);
        assert_eq!(original_position_from_scale(10.0, 100.0, 1.5), -40.0);
        assert_eq!(original_position_from_scale(10.0, 100.0, 0.5), 60.0);
    }
}
