//! # Error Types
//!
//! Top-level error type shared by the workspace. Domain crates define their
//! own narrower error enums and convert into [`PlmError`] at the boundary.
//!
//! ## Design
//!
//! - Rejections carry the full rejection message produced by the state
//!   machine, so the CLI can print it verbatim.
//! - Timestamp and input parsing failures include the offending input.

use thiserror::Error;

/// Top-level error type for the project lifecycle machine.
#[derive(Error, Debug)]
pub enum PlmError {
    /// Caller-supplied input could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation was rejected by the current project state.
    #[error("operation rejected: {0}")]
    Rejected(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
