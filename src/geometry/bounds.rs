//! Axis-aligned bounds of a rotated box

use crate::geometry::handles::{box_rotation, unrotated_point};
use crate::geometry::types::{BoxState, Bounds, HandleId};

/// Smallest axis-aligned box containing the four rotated corners.
///
/// One rotation is built for all four corners. The first corner seeds min
/// and max; the rest are folded in.
pub fn bounds(state: &BoxState) -> Bounds {
    let rotation = box_rotation(state);
    let [first, rest @ ..] = HandleId::CORNERS
        .map(|corner| rotation.transform_point(unrotated_point(corner, state)));
    rest.into_iter().fold(Bounds::at(first), Bounds::include)
}
