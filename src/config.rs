//! Loading box descriptions from TOML
//!
//! ```toml
//! x = 10.0
//! y = 20.0
//! width = 100.0
//! height = 50.0
//! scale_x = 1.5      # optional, defaults to 1.0
//! scale_y = 1.0      # optional, defaults to 1.0
//! angle = 30.0       # optional, degrees clockwise
//! scale_from_center = false
//!
//! [center]           # optional precomputed center
//! x = 85.0
//! y = 45.0
//! ```

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::geometry::BoxState;

/// Errors that can occur when loading a box description
#[derive(Error, Debug)]
pub enum BoxFileError {
    #[error("Failed to read box file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse box TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid value for '{field}': {value}")]
    InvalidField { field: &'static str, value: f64 },
}

impl BoxState {
    /// Load a box description from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BoxFileError> {
        debug!(path = %path.display(), "loading box description");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a box description from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, BoxFileError> {
        let state: BoxState = toml::from_str(content)?;
        state.validate()?;
        debug!(?state, "parsed box description");
        Ok(state)
    }

    /// Reject values the geometry cannot meaningfully work with.
    ///
    /// Every number must be finite and the scale factors non-negative.
    pub fn validate(&self) -> Result<(), BoxFileError> {
        let mut fields = vec![
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
            ("angle", self.angle),
        ];
        if let Some(center) = self.center {
            fields.push(("center.x", center.x));
            fields.push(("center.y", center.y));
        }

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(BoxFileError::InvalidField { field, value });
            }
        }
        for (field, value) in [("scale_x", self.scale_x), ("scale_y", self.scale_y)] {
            if value < 0.0 {
                return Err(BoxFileError::InvalidField { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_box_uses_defaults() {
        let state = BoxState::from_toml_str(
            r#"
x = 0.0
y = 0.0
width = 100.0
height = 50.0
"#,
        )
        .expect("Should parse");
        assert_eq!(state, BoxState::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_full_box() {
        let state = BoxState::from_toml_str(
            r#"
x = 10.0
y = 20.0
width = 100.0
height = 50.0
scale_x = 1.5
scale_y = 2.0
angle = 30.0
scale_from_center = true

[center]
x = 85.0
y = 45.0
"#,
        )
        .expect("Should parse");
        assert_eq!(
            state,
            BoxState::new(10.0, 20.0, 100.0, 50.0)
                .with_scale(1.5, 2.0)
                .with_angle(30.0)
                .with_center(Point::new(85.0, 45.0))
                .with_scale_from_center(true)
        );
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let result = BoxState::from_toml_str("x = 0.0\ny = 0.0\nwidth = 1.0\n");
        assert!(matches!(result, Err(BoxFileError::ParseError(_))));
    }

    #[test]
    fn test_negative_scale_rejected() {
        let result = BoxState::from_toml_str(
            "x = 0.0\ny = 0.0\nwidth = 1.0\nheight = 1.0\nscale_y = -2.0\n",
        );
        match result {
            Err(BoxFileError::InvalidField { field, value }) => {
                assert_eq!(field, "scale_y");
                assert_eq!(value, -2.0);
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = BoxState::from_toml_str("x = nan\ny = 0.0\nwidth = 1.0\nheight = 1.0\n");
        assert!(matches!(
            result,
            Err(BoxFileError::InvalidField { field: "x", .. })
        ));
    }

    #[test]
    fn test_zero_scale_accepted() {
        let state = BoxState::new(0.0, 0.0, 10.0, 10.0).with_scale(0.0, 0.0);
        assert!(state.validate().is_ok());
    }
}
