//! Error types for handle resolution

use thiserror::Error;

use crate::geometry::HandleId;

/// Errors raised at the string boundary of the engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// A handle token outside the eight known handles
    #[error("invalid handle '{id}' (valid handles: {valid_handles})")]
    InvalidHandleId { id: String, valid_handles: String },
}

impl HandleError {
    /// Create an invalid handle error listing the accepted tokens
    pub fn invalid_handle(id: impl Into<String>) -> Self {
        Self::InvalidHandleId {
            id: id.into(),
            valid_handles: HandleId::ALL
                .iter()
                .map(|h| h.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
