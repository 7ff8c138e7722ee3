//! # Operations
//!
//! The operation set every project state answers to, as a value. The CLI
//! parses operations from text of the form `name` or `name=argument`:
//!
//! | Text | Operation |
//! |---|---|
//! | `forward` | [`Operation::Forward`] |
//! | `status` | [`Operation::Status`] |
//! | `draft-report` | [`Operation::DraftReport`] |
//! | `raise-risk=<text>` | [`Operation::RaiseRisk`] |
//! | `assign=<department>,<employee>,<task>` | [`Operation::AssignTasks`] |
//! | `next-action=<submitted\|at-risk\|on-hold>` | [`Operation::SetNextAction`] |

use serde::{Deserialize, Serialize};

use plm_core::Task;

use crate::error::ProjectError;
use crate::state::ActiveAction;

/// An operation requested of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    /// Advance the lifecycle.
    Forward,
    /// Report the current state.
    Status,
    /// Produce the intake report.
    DraftReport,
    /// Record a risk.
    RaiseRisk {
        /// Free-text description of the risk.
        risk: String,
    },
    /// Assign a task to an employee of a department.
    AssignTasks {
        /// Department the employee belongs to.
        department: String,
        /// Employee receiving the task.
        employee_id: String,
        /// The task.
        task: Task,
    },
    /// Choose where an Active project goes next.
    SetNextAction {
        /// The chosen action.
        action: ActiveAction,
    },
}

impl Operation {
    /// The payload-free kind of this operation.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Forward => OperationKind::Forward,
            Self::Status => OperationKind::Status,
            Self::DraftReport => OperationKind::DraftReport,
            Self::RaiseRisk { .. } => OperationKind::RaiseRisk,
            Self::AssignTasks { .. } => OperationKind::AssignTasks,
            Self::SetNextAction { .. } => OperationKind::SetNextAction,
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (s.trim(), None),
        };

        let malformed = |reason: &str| ProjectError::MalformedOperation {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        match (name, arg) {
            ("forward", None) => Ok(Self::Forward),
            ("status", None) => Ok(Self::Status),
            ("draft-report", None) => Ok(Self::DraftReport),
            ("forward" | "status" | "draft-report", Some(_)) => {
                Err(malformed("operation takes no argument"))
            }
            ("raise-risk", Some(risk)) => Ok(Self::RaiseRisk {
                risk: risk.to_string(),
            }),
            ("raise-risk", None) => Err(malformed("expected raise-risk=<text>")),
            ("assign", Some(arg)) => {
                let mut parts = arg.splitn(3, ',');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(department), Some(employee_id), Some(task)) => Ok(Self::AssignTasks {
                        department: department.trim().to_string(),
                        employee_id: employee_id.trim().to_string(),
                        task: Task::new(task.trim()),
                    }),
                    _ => Err(malformed("expected assign=<department>,<employee>,<task>")),
                }
            }
            ("assign", None) => Err(malformed("expected assign=<department>,<employee>,<task>")),
            ("next-action", Some(action)) => Ok(Self::SetNextAction {
                action: action.parse()?,
            }),
            ("next-action", None) => Err(malformed("expected next-action=<action>")),
            _ => Err(ProjectError::UnknownOperation(s.to_string())),
        }
    }
}

/// Payload-free name of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    /// `forward`
    Forward,
    /// `status`
    Status,
    /// `draft-report`
    DraftReport,
    /// `raise-risk`
    RaiseRisk,
    /// `assign`
    #[serde(rename = "assign")]
    AssignTasks,
    /// `next-action`
    #[serde(rename = "next-action")]
    SetNextAction,
}

impl OperationKind {
    /// Command-line name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Status => "status",
            Self::DraftReport => "draft-report",
            Self::RaiseRisk => "raise-risk",
            Self::AssignTasks => "assign",
            Self::SetNextAction => "next-action",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
