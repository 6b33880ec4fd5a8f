//! Handle geometry engine
//!
//! Computes where the eight resize handles of a scaled, rotated rectangle
//! sit on screen, and the relationships a resize gesture needs: the opposite
//! handle, the active handle, the drag basis, the drag projection and the
//! axis-aligned bounds. Every function is pure and allocation free.

pub mod bounds;
pub mod center;
pub mod drag;
pub mod gesture;
pub mod handles;
pub mod resolve;
pub mod transform;
pub mod types;

pub use bounds::bounds;
pub use center::{center, original_position_from_scale};
pub use drag::{orientation_factors, project_drag};
pub use gesture::ResizeGesture;
pub use handles::{box_rotation, handle_point, handle_points, unrotated_point};
pub use resolve::{active_point, opposite_point};
pub use transform::{rotate, Angle, RotationTransform};
pub use types::*;
