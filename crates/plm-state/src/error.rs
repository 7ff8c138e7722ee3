//! # Project Errors
//!
//! Errors raised while interpreting operations or when a caller asks for a
//! rejected operation to be treated as a failure.

use thiserror::Error;

use plm_core::PlmError;

use crate::operation::OperationKind;
use crate::state::StateKind;

/// Errors produced by the project state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// The operation name is not recognized.
    #[error(
        "unknown operation {0:?}; expected one of: forward, status, draft-report, \
         raise-risk=<text>, assign=<department>,<employee>,<task>, next-action=<action>"
    )]
    UnknownOperation(String),

    /// The operation name is known but its argument is missing or incomplete.
    #[error("malformed operation {input:?}: {reason}")]
    MalformedOperation {
        /// The text as given.
        input: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The Active sub-action is not recognized.
    #[error("unknown action {0:?}; expected submitted, at-risk or on-hold")]
    UnknownAction(String),

    /// The current state does not support the operation.
    #[error("{operation} rejected in state {state}: {message}")]
    RejectedForState {
        /// State the project was in.
        state: StateKind,
        /// Operation that was attempted.
        operation: OperationKind,
        /// The state's rejection message.
        message: String,
    },
}

impl From<ProjectError> for PlmError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::RejectedForState { message, .. } => PlmError::Rejected(message),
            other => PlmError::InvalidInput(other.to_string()),
        }
    }
}
