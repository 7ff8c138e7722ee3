//! # Project Context
//!
//! [`Project`] owns the current [`ProjectState`] and forwards every
//! operation to it through [`transition()`]. Whenever the state kind
//! changes, the project appends a [`ProjectTransitionRecord`] to its log.
//!
//! Rejected operations are not errors here: they come back as
//! [`ProjectEvent::Rejected`] and leave the project untouched. Callers
//! that want `?`-style flow use [`ProjectEvent::into_result()`].

use serde::{Deserialize, Serialize};

use plm_core::{ProjectId, Task, Timestamp};

use crate::event::ProjectEvent;
use crate::operation::Operation;
use crate::state::{ActiveAction, DraftState, ProjectState, StateKind, TaskAssignment};
use crate::transition::{self, transition};

/// Record of a project state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTransitionRecord {
    /// State before the transition.
    pub from_state: StateKind,
    /// State after the transition.
    pub to_state: StateKind,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// Reason for the transition.
    pub reason: String,
}

/// A project with its current lifecycle state and transition history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// When the project was created.
    pub created_at: Timestamp,
    state: ProjectState,
    transitions: Vec<ProjectTransitionRecord>,
}

impl Project {
    /// Create a new project in Draft with the given intake data.
    pub fn new(
        deadlines: Vec<String>,
        departments: Vec<String>,
        client_requirements: Vec<String>,
        project_type: impl Into<String>,
    ) -> Self {
        Self::from_draft(DraftState::new(
            deadlines,
            departments,
            client_requirements,
            project_type,
        ))
    }

    /// Create a new project in Draft from prepared intake data.
    pub fn from_draft(draft: DraftState) -> Self {
        Self {
            id: ProjectId::new(),
            created_at: Timestamp::now(),
            state: ProjectState::Draft(draft),
            transitions: Vec::new(),
        }
    }

    /// Apply an operation to the current state.
    pub fn apply(&mut self, operation: Operation) -> ProjectEvent {
        let kind = operation.kind();
        // `transition` is total, so the placeholder is always overwritten.
        let current = std::mem::replace(&mut self.state, ProjectState::Submitted);
        let (next, event) = transition(current, operation);
        self.state = next;

        match &event {
            ProjectEvent::Transitioned {
                from, to, reason, ..
            } => {
                tracing::debug!(project = %self.id, %from, %to, reason = %reason, "project transitioned");
                self.record(*from, *to, reason);
            }
            ProjectEvent::ForwardBlocked {
                state,
                pending_risks,
            } => {
                tracing::debug!(project = %self.id, %state, pending_risks, "forward blocked");
            }
            ProjectEvent::Rejected { state, message, .. } => {
                tracing::trace!(project = %self.id, %state, operation = %kind, message = %message, "operation rejected");
            }
            _ => {}
        }
        event
    }

    /// Advance the lifecycle.
    pub fn forward(&mut self) -> ProjectEvent {
        self.apply(Operation::Forward)
    }

    /// Report the current state. In Draft the event also carries the intake report.
    pub fn status(&self) -> ProjectEvent {
        transition::status(&self.state)
    }

    /// Produce the intake report. Rejected outside Draft.
    pub fn draft_report(&self) -> ProjectEvent {
        transition::draft_report(&self.state)
    }

    /// Record a risk. Applied in Active and AtRisk only.
    pub fn raise_risk(&mut self, risk: impl Into<String>) -> ProjectEvent {
        self.apply(Operation::RaiseRisk { risk: risk.into() })
    }

    /// Assign a task to an employee of a department. Applied in Active only.
    pub fn assign_tasks(
        &mut self,
        department: impl Into<String>,
        employee_id: impl Into<String>,
        task: Task,
    ) -> ProjectEvent {
        self.apply(Operation::AssignTasks {
            department: department.into(),
            employee_id: employee_id.into(),
            task,
        })
    }

    /// Choose where an Active project goes on its next `forward()`.
    pub fn set_next_action(&mut self, action: ActiveAction) -> ProjectEvent {
        self.apply(Operation::SetNextAction { action })
    }

    /// The current state, with its payload.
    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    /// The kind of the current state.
    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Risks recorded by the current state instance.
    pub fn risks(&self) -> &[String] {
        self.state.risks()
    }

    /// Task assignments made during the current Active period.
    pub fn tasks(&self) -> &[TaskAssignment] {
        self.state.tasks()
    }

    /// The report carried into the current Active period.
    pub fn carried_report(&self) -> Option<&str> {
        match &self.state {
            ProjectState::Active(active) => Some(active.draft_report()),
            ProjectState::Draft(_)
            | ProjectState::Submitted
            | ProjectState::AtRisk(_)
            | ProjectState::OnHold => None,
        }
    }

    /// The pending Active sub-action, when Active.
    pub fn next_action(&self) -> Option<ActiveAction> {
        match &self.state {
            ProjectState::Active(active) => Some(active.next_action()),
            ProjectState::Draft(_)
            | ProjectState::Submitted
            | ProjectState::AtRisk(_)
            | ProjectState::OnHold => None,
        }
    }

    /// Access the transition log.
    pub fn transition_log(&self) -> &[ProjectTransitionRecord] {
        &self.transitions
    }

    /// Number of transitions that have occurred.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    fn record(&mut self, from: StateKind, to: StateKind, reason: &str) {
        self.transitions.push(ProjectTransitionRecord {
            from_state: from,
            to_state: to,
            timestamp: Timestamp::now(),
            reason: reason.to_string(),
        });
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
