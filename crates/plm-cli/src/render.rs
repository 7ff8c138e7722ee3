//! # Console Narration
//!
//! Renders [`ProjectEvent`]s as the human-readable lines printed by the
//! `text` output format.

use plm_state::{ProjectEvent, StateKind};

/// Narration lines for one event, without trailing newlines.
pub fn narrate(event: &ProjectEvent) -> Vec<String> {
    match event {
        ProjectEvent::Transitioned {
            from, to, report, ..
        } => narrate_transition(*from, *to, report.as_deref()),
        ProjectEvent::ForwardBlocked { .. } => vec![
            "Attempting to resolve risks...".to_string(),
            "Risks still pending, staying in AtRisk state.".to_string(),
        ],
        ProjectEvent::StatusReported { state, report } => {
            let mut lines = vec![status_line(*state).to_string()];
            if let Some(report) = report {
                lines.push(report_block(report));
            }
            lines
        }
        ProjectEvent::ReportDrafted { report } => vec![report_block(report)],
        ProjectEvent::RiskRaised { state, risk } => match state {
            StateKind::AtRisk => vec![format!("Risk added in AtRisk state: {risk}")],
            _ => vec![format!("Risk added: {risk}")],
        },
        ProjectEvent::TaskAssigned { assignment } => vec![format!(
            "Assigned task: {} to {} in {}",
            assignment.task, assignment.employee_id, assignment.department
        )],
        ProjectEvent::NextActionSet { action } => vec![format!(
            "Next forward will move the project to {}.",
            action.target().label()
        )],
        ProjectEvent::Rejected { message, .. } => vec![message.clone()],
    }
}

fn narrate_transition(from: StateKind, to: StateKind, report: Option<&str>) -> Vec<String> {
    match from {
        StateKind::Draft => {
            let mut lines = vec!["Submitting for approval...".to_string()];
            if let Some(report) = report {
                lines.push(report_block(report));
            }
            lines
        }
        StateKind::Submitted => vec!["Project approved and moving forward.".to_string()],
        StateKind::Active => vec![format!("Project moved from Active to {}.", to.label())],
        StateKind::AtRisk => vec![
            "Attempting to resolve risks...".to_string(),
            "No risks left, moving to Active state.".to_string(),
        ],
        StateKind::OnHold => vec!["Resuming project from OnHold...".to_string()],
    }
}

fn status_line(state: StateKind) -> &'static str {
    match state {
        StateKind::Draft => "Project is in Draft.",
        StateKind::Submitted => "Project is in Submitted state, awaiting approval.",
        StateKind::Active => "Project is in Active State.",
        StateKind::AtRisk => "Project is At Risk!",
        StateKind::OnHold => "Project is currently On Hold.",
    }
}

fn report_block(report: &str) -> String {
    format!("Report: \n{report}")
}
