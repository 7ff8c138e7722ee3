//! # Project States
//!
//! The five lifecycle states of a project and the data each one carries.
//!
//! ## States
//!
//! ```text
//! Draft ──▶ Active ──▶ Submitted ──▶ Active
//!             │
//!             ├──▶ AtRisk ──▶ Active (only once no risks are pending)
//!             │
//!             └──▶ OnHold ──▶ Active
//! ```
//!
//! `Draft` is the initial state. There is no terminal state: every branch
//! returns to `Active`.
//!
//! ## Design Decision
//!
//! Each state is a variant of [`ProjectState`] carrying its own payload
//! rather than a separate type behind a trait object. Every operation is an
//! exhaustive `match`, so adding a state forces every operation to decide
//! what it means there. [`StateKind`] is the payload-free companion used in
//! events, logs and transition records.

use serde::{Deserialize, Serialize};

use plm_core::Task;

use crate::error::ProjectError;
use crate::report::render_intake_report;

/// Project type assigned when Active is entered from anywhere but Draft.
pub const DEFAULT_PROJECT_TYPE: &str = "Default";

/// Report carried into Active after approval of a submitted project.
pub const AUTO_GENERATED_REPORT: &str = "Auto-generated report";

/// Report carried into Active after all risks are cleared.
pub const RECOVERED_REPORT: &str = "Recovered report";

/// Report carried into Active when a held project resumes.
pub const RESUMED_REPORT: &str = "Resumed report";

// ─── State Kind ──────────────────────────────────────────────────────

/// Payload-free name of a lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateKind {
    /// Intake data is being collected.
    Draft,
    /// Waiting for approval.
    Submitted,
    /// Work is under way.
    Active,
    /// Risks have been flagged.
    AtRisk,
    /// Work is paused.
    OnHold,
}

impl StateKind {
    /// All states, in lifecycle order.
    pub const ALL: [StateKind; 5] = [
        Self::Draft,
        Self::Submitted,
        Self::Active,
        Self::AtRisk,
        Self::OnHold,
    ];

    /// The canonical string name of this state (e.g., "AT_RISK").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Active => "ACTIVE",
            Self::AtRisk => "AT_RISK",
            Self::OnHold => "ON_HOLD",
        }
    }

    /// The human-facing label used in narration (e.g., "AtRisk").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Active => "Active",
            Self::AtRisk => "AtRisk",
            Self::OnHold => "OnHold",
        }
    }

    /// States reachable from this one through `forward()`.
    pub fn forward_targets(&self) -> &'static [StateKind] {
        match self {
            Self::Draft | Self::Submitted | Self::OnHold => &[Self::Active],
            Self::Active => &[Self::Submitted, Self::AtRisk, Self::OnHold],
            // Staying put is the blocked case, not a transition.
            Self::AtRisk => &[Self::Active],
        }
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Active Sub-Action ───────────────────────────────────────────────

/// Where an Active project goes on its next `forward()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveAction {
    /// Move to AtRisk.
    AtRisk,
    /// Move to OnHold.
    OnHold,
    /// Move back to Submitted for another approval round.
    #[default]
    Submitted,
}

impl ActiveAction {
    /// The state this action leads to.
    pub fn target(&self) -> StateKind {
        match self {
            Self::AtRisk => StateKind::AtRisk,
            Self::OnHold => StateKind::OnHold,
            Self::Submitted => StateKind::Submitted,
        }
    }

    /// Command-line spelling of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AtRisk => "at-risk",
            Self::OnHold => "on-hold",
            Self::Submitted => "submitted",
        }
    }
}

impl std::fmt::Display for ActiveAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActiveAction {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "at-risk" | "atrisk" => Ok(Self::AtRisk),
            "on-hold" | "onhold" => Ok(Self::OnHold),
            "submitted" => Ok(Self::Submitted),
            _ => Err(ProjectError::UnknownAction(s.to_string())),
        }
    }
}

// ─── Task Assignment ─────────────────────────────────────────────────

/// A task given to an employee of a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssignment {
    /// The task being assigned.
    pub task: Task,
    /// Department the employee belongs to.
    pub department: String,
    /// Employee receiving the task.
    pub employee_id: String,
}

impl std::fmt::Display for TaskAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}:{}", self.task, self.department, self.employee_id)
    }
}

// ─── Per-State Data ──────────────────────────────────────────────────

/// Intake data collected while the project is a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    /// Deadlines, in the order given.
    pub deadlines: Vec<String>,
    /// Departments involved, in the order given.
    pub departments: Vec<String>,
    /// Client requirements, in the order given.
    pub client_requirements: Vec<String>,
    /// Free-form project type (e.g., "IT Upgrade").
    pub project_type: String,
}

impl DraftState {
    /// Create draft intake data.
    pub fn new(
        deadlines: Vec<String>,
        departments: Vec<String>,
        client_requirements: Vec<String>,
        project_type: impl Into<String>,
    ) -> Self {
        Self {
            deadlines,
            departments,
            client_requirements,
            project_type: project_type.into(),
        }
    }

    /// Render the intake report for this draft.
    pub fn report(&self) -> String {
        render_intake_report(&self.deadlines, &self.departments, &self.client_requirements)
    }
}

/// A project with work under way.
///
/// Tasks and risks belong to this instance only. Leaving Active drops
/// them; re-entering starts from empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveState {
    pub(crate) project_type: String,
    pub(crate) draft_report: String,
    pub(crate) tasks: Vec<TaskAssignment>,
    pub(crate) next_action: ActiveAction,
    pub(crate) milestones: Vec<String>,
    pub(crate) risks: Vec<String>,
}

impl ActiveState {
    /// Enter Active with the given project type and carried report.
    pub fn new(project_type: impl Into<String>, draft_report: impl Into<String>) -> Self {
        Self {
            project_type: project_type.into(),
            draft_report: draft_report.into(),
            tasks: Vec::new(),
            next_action: ActiveAction::default(),
            milestones: Vec::new(),
            risks: Vec::new(),
        }
    }

    /// Project type carried in from the previous state.
    pub fn project_type(&self) -> &str {
        &self.project_type
    }

    /// Report carried in from the previous state.
    pub fn draft_report(&self) -> &str {
        &self.draft_report
    }

    /// Task assignments made during this Active period.
    pub fn tasks(&self) -> &[TaskAssignment] {
        &self.tasks
    }

    /// Target of the next `forward()`.
    pub fn next_action(&self) -> ActiveAction {
        self.next_action
    }

    /// Milestones. Nothing records them yet.
    pub fn milestones(&self) -> &[String] {
        &self.milestones
    }

    /// Risks raised during this Active period.
    pub fn risks(&self) -> &[String] {
        &self.risks
    }
}

/// A project with flagged risks. Pending risks block the return to Active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtRiskState {
    pub(crate) risks: Vec<String>,
}

impl AtRiskState {
    /// Risks raised since entering AtRisk.
    pub fn risks(&self) -> &[String] {
        &self.risks
    }
}

// ─── Project State ───────────────────────────────────────────────────

/// The current lifecycle state of a project, with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectState {
    /// Intake data is being collected.
    Draft(DraftState),
    /// Waiting for approval.
    Submitted,
    /// Work is under way.
    Active(ActiveState),
    /// Risks have been flagged.
    AtRisk(AtRiskState),
    /// Work is paused.
    OnHold,
}

impl ProjectState {
    /// The payload-free kind of this state.
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Draft(_) => StateKind::Draft,
            Self::Submitted => StateKind::Submitted,
            Self::Active(_) => StateKind::Active,
            Self::AtRisk(_) => StateKind::AtRisk,
            Self::OnHold => StateKind::OnHold,
        }
    }

    /// Recorded risks. Empty in states that do not track risks.
    pub fn risks(&self) -> &[String] {
        match self {
            Self::Active(active) => active.risks(),
            Self::AtRisk(at_risk) => at_risk.risks(),
            Self::Draft(_) | Self::Submitted | Self::OnHold => &[],
        }
    }

    /// Task assignments. Empty outside Active.
    pub fn tasks(&self) -> &[TaskAssignment] {
        match self {
            Self::Active(active) => active.tasks(),
            Self::Draft(_) | Self::Submitted | Self::AtRisk(_) | Self::OnHold => &[],
        }
    }
}
