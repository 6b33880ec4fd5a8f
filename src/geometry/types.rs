//! Core types for the handle geometry engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HandleError;

/// A 2D point in screen coordinates (Y axis pointing down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Geometric state of a scaled and rotated rectangle.
///
/// `x`/`y` is the unscaled top-left origin and `width`/`height` the unscaled
/// size. The scale transform is anchored at that origin; the rotation is
/// applied about the resulting center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxState {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
    /// Rotation in degrees, clockwise positive on screen
    #[serde(default)]
    pub angle: f64,
    /// Precomputed center. Always takes priority over the derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    /// Resize mode where the rectangle grows about its center
    #[serde(default)]
    pub scale_from_center: bool,
}

fn unit_scale() -> f64 {
    1.0
}

impl BoxState {
    /// Create an unscaled, unrotated box
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            center: None,
            scale_from_center: false,
        }
    }

    /// Set the scale factors
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Set the rotation angle in degrees
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Supply a precomputed center
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Enable or disable scale-from-center mode
    pub fn with_scale_from_center(mut self, enabled: bool) -> Self {
        self.scale_from_center = enabled;
        self
    }

    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// The explicit center if one was supplied, otherwise the derived one
    pub fn resolved_center(&self) -> Point {
        self.center
            .unwrap_or_else(|| crate::geometry::center::center(self))
    }

    /// Undo scale growth already applied to a reported origin.
    ///
    /// The center is left untouched so an explicit value survives.
    pub fn with_unscaled_origin(mut self) -> Self {
        self.x = crate::geometry::center::original_position_from_scale(
            self.x,
            self.width,
            self.scale_x,
        );
        self.y = crate::geometry::center::original_position_from_scale(
            self.y,
            self.height,
            self.scale_y,
        );
        self
    }
}

impl Default for BoxState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Axis-aligned bounding box of a rotated rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    /// A zero-sized box at a single point
    pub fn at(point: Point) -> Self {
        Self {
            xmin: point.x,
            xmax: point.x,
            ymin: point.y,
            ymax: point.y,
        }
    }

    /// Grow to include a point
    pub fn include(self, point: Point) -> Self {
        Self {
            xmin: self.xmin.min(point.x),
            xmax: self.xmax.max(point.x),
            ymin: self.ymin.min(point.y),
            ymax: self.ymax.max(point.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// Check whether a point lies inside, allowing `tolerance` of slack
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        point.x >= self.xmin - tolerance
            && point.x <= self.xmax + tolerance
            && point.y >= self.ymin - tolerance
            && point.y <= self.ymax + tolerance
    }
}

/// Sine/cosine pair used to orient drag deltas for a handle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SineCosine {
    pub sin: f64,
    pub cos: f64,
}

impl SineCosine {
    pub fn from_radians(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { sin, cos }
    }

    /// Express a screen-space delta in this basis
    pub fn rotate_delta(&self, delta: Point) -> Point {
        Point {
            x: delta.x * self.cos + delta.y * self.sin,
            y: delta.y * self.cos - delta.x * self.sin,
        }
    }
}

/// One of the eight resize handles of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleId {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "tm")]
    TopMiddle,
    #[serde(rename = "bm")]
    BottomMiddle,
    #[serde(rename = "ml")]
    MiddleLeft,
    #[serde(rename = "mr")]
    MiddleRight,
}

impl HandleId {
    /// Every handle, corners first
    pub const ALL: [HandleId; 8] = [
        HandleId::TopLeft,
        HandleId::TopRight,
        HandleId::BottomLeft,
        HandleId::BottomRight,
        HandleId::TopMiddle,
        HandleId::BottomMiddle,
        HandleId::MiddleLeft,
        HandleId::MiddleRight,
    ];

    pub const CORNERS: [HandleId; 4] = [
        HandleId::TopLeft,
        HandleId::TopRight,
        HandleId::BottomLeft,
        HandleId::BottomRight,
    ];

    /// The handle mirrored across the rectangle's center
    pub fn opposite(self) -> HandleId {
        match self {
            HandleId::TopLeft => HandleId::BottomRight,
            HandleId::BottomRight => HandleId::TopLeft,
            HandleId::TopRight => HandleId::BottomLeft,
            HandleId::BottomLeft => HandleId::TopRight,
            HandleId::TopMiddle => HandleId::BottomMiddle,
            HandleId::BottomMiddle => HandleId::TopMiddle,
            HandleId::MiddleLeft => HandleId::MiddleRight,
            HandleId::MiddleRight => HandleId::MiddleLeft,
        }
    }

    /// Short token used on the wire and in config files
    pub fn as_str(self) -> &'static str {
        match self {
            HandleId::TopLeft => "tl",
            HandleId::TopRight => "tr",
            HandleId::BottomLeft => "bl",
            HandleId::BottomRight => "br",
            HandleId::TopMiddle => "tm",
            HandleId::BottomMiddle => "bm",
            HandleId::MiddleLeft => "ml",
            HandleId::MiddleRight => "mr",
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            HandleId::TopLeft | HandleId::TopRight | HandleId::BottomLeft | HandleId::BottomRight
        )
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandleId {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandleId::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| HandleError::invalid_handle(s))
    }
}

impl TryFrom<&str> for HandleId {
    type Error = HandleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
