//! # Project Events
//!
//! Every operation on a project yields exactly one [`ProjectEvent`]
//! describing what happened. Events are data: rendering them as console
//! text is the caller's concern.
//!
//! [`ProjectEvent::outcome()`] collapses an event into an [`Outcome`] so
//! callers and tests can branch on whether the state accepted the operation
//! without inspecting the event payload.

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;
use crate::operation::OperationKind;
use crate::state::{ActiveAction, StateKind, TaskAssignment};

/// What an operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProjectEvent {
    /// The current state was replaced.
    Transitioned {
        /// State before the transition.
        from: StateKind,
        /// State after the transition.
        to: StateKind,
        /// Why the transition happened.
        reason: String,
        /// Intake report generated on the way out of Draft.
        report: Option<String>,
    },

    /// `forward()` was refused by a guard; the state is unchanged.
    ForwardBlocked {
        /// The state that stayed current.
        state: StateKind,
        /// Number of risks still recorded.
        pending_risks: usize,
    },

    /// The current state was reported.
    StatusReported {
        /// The current state.
        state: StateKind,
        /// The intake report, when the project is a draft.
        report: Option<String>,
    },

    /// The intake report was produced.
    ReportDrafted {
        /// The rendered report.
        report: String,
    },

    /// A risk was recorded.
    RiskRaised {
        /// The state that recorded it.
        state: StateKind,
        /// The risk text.
        risk: String,
    },

    /// A task was assigned.
    TaskAssigned {
        /// The recorded assignment.
        assignment: TaskAssignment,
    },

    /// Active's next forward target was changed.
    NextActionSet {
        /// The new target.
        action: ActiveAction,
    },

    /// The current state does not support the operation. Nothing changed.
    Rejected {
        /// The current state.
        state: StateKind,
        /// The operation that was attempted.
        operation: OperationKind,
        /// The state's rejection message.
        message: String,
    },
}

/// Coarse classification of a [`ProjectEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The operation took effect.
    Applied,
    /// A guard held the project in its current state.
    Blocked {
        /// The state that stayed current.
        state: StateKind,
    },
    /// The current state does not support the operation.
    RejectedForState {
        /// The current state.
        state: StateKind,
    },
}

impl ProjectEvent {
    /// Classify this event.
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::ForwardBlocked { state, .. } => Outcome::Blocked { state: *state },
            Self::Rejected { state, .. } => Outcome::RejectedForState { state: *state },
            Self::Transitioned { .. }
            | Self::StatusReported { .. }
            | Self::ReportDrafted { .. }
            | Self::RiskRaised { .. }
            | Self::TaskAssigned { .. }
            | Self::NextActionSet { .. } => Outcome::Applied,
        }
    }

    /// Whether the operation took effect.
    pub fn is_applied(&self) -> bool {
        self.outcome() == Outcome::Applied
    }

    /// Whether the current state rejected the operation.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The intake report carried by this event, if any.
    pub fn report(&self) -> Option<&str> {
        match self {
            Self::ReportDrafted { report } => Some(report.as_str()),
            Self::Transitioned { report, .. } | Self::StatusReported { report, .. } => {
                report.as_deref()
            }
            _ => None,
        }
    }

    /// Turn a rejection into an error, passing every other event through.
    pub fn into_result(self) -> Result<ProjectEvent, ProjectError> {
        match self {
            Self::Rejected {
                state,
                operation,
                message,
            } => Err(ProjectError::RejectedForState {
                state,
                operation,
                message,
            }),
            other => Ok(other),
        }
    }
}
