//! # Transition Function
//!
//! The whole behavior of the state machine as one pure function:
//! `(state, operation) -> (state, event)`. No I/O, no clock, no logging.
//! [`crate::Project`] wraps it with a transition log and tracing.
//!
//! ## Forward Table
//!
//! | From | To | Condition / carried data |
//! |---|---|---|
//! | Draft | Active | always; project type + freshly rendered intake report |
//! | Submitted | Active | always; `"Default"`, `"Auto-generated report"` |
//! | Active | Submitted / AtRisk / OnHold | the Active sub-action (default Submitted) |
//! | AtRisk | Active | only with no risks recorded; `"Default"`, `"Recovered report"` |
//! | OnHold | Active | always; `"Default"`, `"Resumed report"` |
//!
//! ## Per-State Restrictions
//!
//! | Operation | Applied in | Rejected in |
//! |---|---|---|
//! | `draft_report` | Draft | every other state |
//! | `raise_risk` | Active, AtRisk | Draft, Submitted, OnHold |
//! | `assign_tasks` | Active | every other state |
//! | `set_next_action` | Active | every other state |
//!
//! `forward` and `status` are accepted everywhere.

use plm_core::Task;

use crate::event::ProjectEvent;
use crate::operation::{Operation, OperationKind};
use crate::state::{
    ActiveAction, ActiveState, AtRiskState, ProjectState, StateKind, TaskAssignment,
    AUTO_GENERATED_REPORT, DEFAULT_PROJECT_TYPE, RECOVERED_REPORT, RESUMED_REPORT,
};

/// Apply `operation` to `state`, returning the next state and what happened.
///
/// Rejected and blocked operations return the input state unchanged.
pub fn transition(state: ProjectState, operation: Operation) -> (ProjectState, ProjectEvent) {
    match operation {
        Operation::Forward => forward(state),
        Operation::Status => {
            let event = status(&state);
            (state, event)
        }
        Operation::DraftReport => {
            let event = draft_report(&state);
            (state, event)
        }
        Operation::RaiseRisk { risk } => raise_risk(state, risk),
        Operation::AssignTasks {
            department,
            employee_id,
            task,
        } => assign_tasks(state, department, employee_id, task),
        Operation::SetNextAction { action } => set_next_action(state, action),
    }
}

fn forward(state: ProjectState) -> (ProjectState, ProjectEvent) {
    let from = state.kind();
    let (next, event) = forward_unchecked(state);
    debug_assert!(
        !event.is_applied() || from.forward_targets().contains(&next.kind()),
        "forward from {from} landed in {}",
        next.kind()
    );
    (next, event)
}

fn forward_unchecked(state: ProjectState) -> (ProjectState, ProjectEvent) {
    let from = state.kind();
    match state {
        ProjectState::Draft(draft) => {
            let report = draft.report();
            let next = ProjectState::Active(ActiveState::new(draft.project_type, report.clone()));
            let event = ProjectEvent::Transitioned {
                from,
                to: StateKind::Active,
                reason: "Draft submitted for approval".to_string(),
                report: Some(report),
            };
            (next, event)
        }
        ProjectState::Submitted => activate(
            from,
            AUTO_GENERATED_REPORT,
            "Project approved and moving forward",
        ),
        ProjectState::Active(active) => {
            let (next, reason) = match active.next_action {
                ActiveAction::Submitted => {
                    (ProjectState::Submitted, "Submitted for another approval round")
                }
                ActiveAction::AtRisk => (
                    ProjectState::AtRisk(AtRiskState::default()),
                    "Flagged as at risk",
                ),
                ActiveAction::OnHold => (ProjectState::OnHold, "Put on hold"),
            };
            let event = ProjectEvent::Transitioned {
                from,
                to: next.kind(),
                reason: reason.to_string(),
                report: None,
            };
            (next, event)
        }
        ProjectState::AtRisk(at_risk) if !at_risk.risks.is_empty() => {
            let event = ProjectEvent::ForwardBlocked {
                state: from,
                pending_risks: at_risk.risks.len(),
            };
            (ProjectState::AtRisk(at_risk), event)
        }
        ProjectState::AtRisk(_) => activate(from, RECOVERED_REPORT, "No risks left"),
        ProjectState::OnHold => activate(from, RESUMED_REPORT, "Resumed from hold"),
    }
}

fn activate(from: StateKind, report: &str, reason: &str) -> (ProjectState, ProjectEvent) {
    let next = ProjectState::Active(ActiveState::new(DEFAULT_PROJECT_TYPE, report));
    let event = ProjectEvent::Transitioned {
        from,
        to: StateKind::Active,
        reason: reason.to_string(),
        report: None,
    };
    (next, event)
}

/// Report the current state without changing it.
pub(crate) fn status(state: &ProjectState) -> ProjectEvent {
    let report = match state {
        ProjectState::Draft(draft) => Some(draft.report()),
        ProjectState::Submitted
        | ProjectState::Active(_)
        | ProjectState::AtRisk(_)
        | ProjectState::OnHold => None,
    };
    ProjectEvent::StatusReported {
        state: state.kind(),
        report,
    }
}

/// Produce the intake report without changing the state.
pub(crate) fn draft_report(state: &ProjectState) -> ProjectEvent {
    let kind = state.kind();
    match state {
        ProjectState::Draft(draft) => ProjectEvent::ReportDrafted {
            report: draft.report(),
        },
        ProjectState::Active(_) => reject(
            kind,
            OperationKind::DraftReport,
            "Cannot draft new report in Active state.",
        ),
        ProjectState::Submitted => reject(
            kind,
            OperationKind::DraftReport,
            "Cannot draft report in Submitted state.",
        ),
        ProjectState::AtRisk(_) => reject(
            kind,
            OperationKind::DraftReport,
            "Cannot draft report in AtRisk state.",
        ),
        ProjectState::OnHold => reject(
            kind,
            OperationKind::DraftReport,
            "Cannot draft report in OnHold state.",
        ),
    }
}

fn raise_risk(mut state: ProjectState, risk: String) -> (ProjectState, ProjectEvent) {
    let kind = state.kind();
    let event = match &mut state {
        ProjectState::Active(active) => {
            active.risks.push(risk.clone());
            ProjectEvent::RiskRaised { state: kind, risk }
        }
        ProjectState::AtRisk(at_risk) => {
            at_risk.risks.push(risk.clone());
            ProjectEvent::RiskRaised { state: kind, risk }
        }
        ProjectState::Draft(_) => reject(
            kind,
            OperationKind::RaiseRisk,
            "Cannot raise risk in Draft state",
        ),
        ProjectState::Submitted => reject(
            kind,
            OperationKind::RaiseRisk,
            "Cannot raise risk while waiting for approval.",
        ),
        ProjectState::OnHold => reject(
            kind,
            OperationKind::RaiseRisk,
            "Cannot raise risk while project is On Hold.",
        ),
    };
    (state, event)
}

fn assign_tasks(
    mut state: ProjectState,
    department: String,
    employee_id: String,
    task: Task,
) -> (ProjectState, ProjectEvent) {
    let kind = state.kind();
    let event = match &mut state {
        ProjectState::Active(active) => {
            let assignment = TaskAssignment {
                task,
                department,
                employee_id,
            };
            active.tasks.push(assignment.clone());
            ProjectEvent::TaskAssigned { assignment }
        }
        ProjectState::Draft(_) => reject(
            kind,
            OperationKind::AssignTasks,
            "Cannot assign tasks in Draft state",
        ),
        ProjectState::Submitted => reject(
            kind,
            OperationKind::AssignTasks,
            "Cannot assign tasks in Submitted state.",
        ),
        ProjectState::AtRisk(_) => reject(
            kind,
            OperationKind::AssignTasks,
            "Tasks paused while project is at risk.",
        ),
        ProjectState::OnHold => reject(
            kind,
            OperationKind::AssignTasks,
            "Cannot assign tasks while On Hold.",
        ),
    };
    (state, event)
}

fn set_next_action(mut state: ProjectState, action: ActiveAction) -> (ProjectState, ProjectEvent) {
    let kind = state.kind();
    let event = match &mut state {
        ProjectState::Active(active) => {
            active.next_action = action;
            ProjectEvent::NextActionSet { action }
        }
        ProjectState::Draft(_)
        | ProjectState::Submitted
        | ProjectState::AtRisk(_)
        | ProjectState::OnHold => ProjectEvent::Rejected {
            state: kind,
            operation: OperationKind::SetNextAction,
            message: format!("Cannot choose a next action in {} state.", kind.label()),
        },
    };
    (state, event)
}

fn reject(state: StateKind, operation: OperationKind, message: &str) -> ProjectEvent {
    ProjectEvent::Rejected {
        state,
        operation,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Outcome;
    use crate::state::DraftState;
    use proptest::prelude::*;

    fn draft() -> ProjectState {
        ProjectState::Draft(DraftState::new(
            vec!["2025-10-10".to_string()],
            vec!["Engineering".to_string()],
            vec!["Security compliance".to_string()],
            "IT Upgrade",
        ))
    }

    fn active() -> ProjectState {
        ProjectState::Active(ActiveState::new("IT Upgrade", "report"))
    }

    fn at_risk(risks: &[&str]) -> ProjectState {
        ProjectState::AtRisk(AtRiskState {
            risks: risks.iter().map(|r| r.to_string()).collect(),
        })
    }

    fn every_state() -> Vec<ProjectState> {
        vec![
            draft(),
            ProjectState::Submitted,
            active(),
            at_risk(&["Budget overrun"]),
            ProjectState::OnHold,
        ]
    }

    fn raise(risk: &str) -> Operation {
        Operation::RaiseRisk {
            risk: risk.to_string(),
        }
    }

    fn assign() -> Operation {
        Operation::AssignTasks {
            department: "Engineering".to_string(),
            employee_id: "E-042".to_string(),
            task: Task::new("Migrate mail"),
        }
    }

    // ── Forward ──────────────────────────────────────────────────────

    #[test]
    fn test_draft_forward_carries_type_and_report() {
        let state = draft();
        let expected_report = match &state {
            ProjectState::Draft(d) => d.report(),
            _ => unreachable!(),
        };
        let (next, event) = transition(state, Operation::Forward);
        match &next {
            ProjectState::Active(active) => {
                assert_eq!(active.project_type(), "IT Upgrade");
                assert_eq!(active.draft_report(), expected_report);
            }
            other => panic!("expected Active, got {other:?}"),
        }
        assert_eq!(event.report(), Some(expected_report.as_str()));
    }

    #[test]
    fn test_submitted_forward_uses_defaults() {
        let (next, _) = transition(ProjectState::Submitted, Operation::Forward);
        assert_eq!(
            next,
            ProjectState::Active(ActiveState::new("Default", "Auto-generated report"))
        );
    }

    #[test]
    fn test_active_forward_defaults_to_submitted() {
        let (next, event) = transition(active(), Operation::Forward);
        assert_eq!(next, ProjectState::Submitted);
        assert!(matches!(
            event,
            ProjectEvent::Transitioned { from: StateKind::Active, to: StateKind::Submitted, .. }
        ));
    }

    #[test]
    fn test_active_forward_follows_next_action() {
        let (state, _) = transition(
            active(),
            Operation::SetNextAction {
                action: ActiveAction::AtRisk,
            },
        );
        let (next, _) = transition(state, Operation::Forward);
        assert_eq!(next, at_risk(&[]));

        let (state, _) = transition(
            active(),
            Operation::SetNextAction {
                action: ActiveAction::OnHold,
            },
        );
        let (next, _) = transition(state, Operation::Forward);
        assert_eq!(next, ProjectState::OnHold);
    }

    #[test]
    fn test_active_risks_do_not_follow_into_at_risk() {
        let (state, _) = transition(active(), raise("Budget overrun"));
        let (state, _) = transition(
            state,
            Operation::SetNextAction {
                action: ActiveAction::AtRisk,
            },
        );
        let (next, _) = transition(state, Operation::Forward);
        assert!(next.risks().is_empty());
    }

    #[test]
    fn test_at_risk_forward_blocked_by_pending_risks() {
        let before = at_risk(&["Budget overrun", "Vendor delay"]);
        let (next, event) = transition(before.clone(), Operation::Forward);
        assert_eq!(next, before);
        assert_eq!(
            event,
            ProjectEvent::ForwardBlocked {
                state: StateKind::AtRisk,
                pending_risks: 2
            }
        );
    }

    #[test]
    fn test_at_risk_forward_without_risks_recovers() {
        let (next, _) = transition(at_risk(&[]), Operation::Forward);
        assert_eq!(
            next,
            ProjectState::Active(ActiveState::new("Default", "Recovered report"))
        );
    }

    #[test]
    fn test_on_hold_forward_resumes() {
        let (next, _) = transition(ProjectState::OnHold, Operation::Forward);
        assert_eq!(
            next,
            ProjectState::Active(ActiveState::new("Default", "Resumed report"))
        );
    }

    #[test]
    fn test_forward_targets_match_table() {
        for state in every_state() {
            let from = state.kind();
            let (next, event) = transition(state, Operation::Forward);
            if event.is_applied() {
                assert!(from.forward_targets().contains(&next.kind()));
            } else {
                assert_eq!(next.kind(), from);
            }
        }
    }

    #[test]
    fn test_forward_lands_on_declared_target_for_every_action() {
        for action in [ActiveAction::Submitted, ActiveAction::AtRisk, ActiveAction::OnHold] {
            let mut active = ActiveState::new("Default", "Auto-generated report");
            active.next_action = action;
            let (next, event) = transition(ProjectState::Active(active), Operation::Forward);
            assert!(event.is_applied());
            assert_eq!(next.kind(), action.target());
            assert!(StateKind::Active.forward_targets().contains(&next.kind()));
        }
    }

    #[test]
    fn test_status_has_no_report_outside_draft() {
        for state in every_state() {
            let kind = state.kind();
            let event = status(&state);
            assert_eq!(event.report().is_some(), kind == StateKind::Draft);
        }
    }

    // ── Status and report ────────────────────────────────────────────

    #[test]
    fn test_status_reports_kind_and_draft_report() {
        for state in every_state() {
            let kind = state.kind();
            let (next, event) = transition(state.clone(), Operation::Status);
            assert_eq!(next, state);
            match event {
                ProjectEvent::StatusReported { state, report } => {
                    assert_eq!(state, kind);
                    assert_eq!(report.is_some(), kind == StateKind::Draft);
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[test]
    fn test_draft_report_rejected_outside_draft() {
        for state in every_state() {
            let kind = state.kind();
            let (next, event) = transition(state.clone(), Operation::DraftReport);
            assert_eq!(next, state);
            if kind == StateKind::Draft {
                assert!(event.report().unwrap().starts_with("Project Intake Review"));
            } else {
                assert_eq!(event.outcome(), Outcome::RejectedForState { state: kind });
            }
        }
    }

    #[test]
    fn test_draft_report_rejection_messages_are_fixed() {
        let (_, event) = transition(ProjectState::Submitted, Operation::DraftReport);
        assert_eq!(
            event,
            ProjectEvent::Rejected {
                state: StateKind::Submitted,
                operation: OperationKind::DraftReport,
                message: "Cannot draft report in Submitted state.".to_string(),
            }
        );
        let (_, again) = transition(ProjectState::Submitted, Operation::DraftReport);
        assert_eq!(event, again);
    }

    // ── Risks, tasks and actions ─────────────────────────────────────

    #[test]
    fn test_raise_risk_only_in_active_and_at_risk() {
        for state in every_state() {
            let kind = state.kind();
            let before = state.risks().len();
            let (next, event) = transition(state.clone(), raise("Scope creep"));
            match kind {
                StateKind::Active | StateKind::AtRisk => {
                    assert!(event.is_applied());
                    assert_eq!(next.risks().len(), before + 1);
                    assert_eq!(next.risks().last().map(String::as_str), Some("Scope creep"));
                }
                _ => {
                    assert!(event.is_rejected());
                    assert_eq!(next, state);
                }
            }
        }
    }

    #[test]
    fn test_assign_tasks_only_in_active() {
        for state in every_state() {
            let kind = state.kind();
            let (next, event) = transition(state.clone(), assign());
            if kind == StateKind::Active {
                assert_eq!(next.tasks().len(), 1);
                assert_eq!(next.tasks()[0].to_string(), "Migrate mail -> Engineering:E-042");
            } else {
                assert!(event.is_rejected());
                assert_eq!(next, state);
            }
        }
    }

    #[test]
    fn test_at_risk_pauses_tasks() {
        let (_, event) = transition(at_risk(&[]), assign());
        assert!(matches!(
            event,
            ProjectEvent::Rejected { ref message, .. } if message == "Tasks paused while project is at risk."
        ));
    }

    #[test]
    fn test_set_next_action_only_in_active() {
        for state in every_state() {
            let kind = state.kind();
            let (next, event) = transition(
                state.clone(),
                Operation::SetNextAction {
                    action: ActiveAction::OnHold,
                },
            );
            if kind == StateKind::Active {
                assert!(event.is_applied());
                match next {
                    ProjectState::Active(a) => assert_eq!(a.next_action(), ActiveAction::OnHold),
                    other => panic!("expected Active, got {other:?}"),
                }
            } else {
                assert!(event.is_rejected());
                assert_eq!(next, state);
            }
        }
    }

    // ── Properties ───────────────────────────────────────────────────

    fn text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 -]{0,16}"
    }

    proptest! {
        #[test]
        fn prop_draft_forward_always_reaches_active(
            deadlines in proptest::collection::vec(text(), 0..4),
            departments in proptest::collection::vec(text(), 0..4),
            requirements in proptest::collection::vec(text(), 0..4),
            project_type in text(),
        ) {
            let draft = DraftState::new(deadlines, departments, requirements, project_type.clone());
            let last_report = draft.report();
            let (next, _) = transition(ProjectState::Draft(draft), Operation::Forward);
            match next {
                ProjectState::Active(active) => {
                    prop_assert_eq!(active.draft_report(), last_report.as_str());
                    prop_assert_eq!(active.project_type(), project_type.as_str());
                }
                other => prop_assert!(false, "expected Active, got {:?}", other),
            }
        }

        #[test]
        fn prop_at_risk_forward_iff_no_risks(risks in proptest::collection::vec(text(), 0..4)) {
            let state = ProjectState::AtRisk(AtRiskState { risks: risks.clone() });
            let (next, _) = transition(state.clone(), Operation::Forward);
            if risks.is_empty() {
                prop_assert_eq!(next.kind(), StateKind::Active);
            } else {
                prop_assert_eq!(next, state);
            }
        }
    }
}
