//! # plm-state: Project Lifecycle State Machine
//!
//! Models the lifecycle of a business project as a five-state machine:
//!
//! ```text
//! Draft ──forward──▶ Active ──forward──▶ Submitted ──forward──▶ Active
//!                      │
//!                      ├──(next action: at-risk)──▶ AtRisk ──forward, no risks──▶ Active
//!                      │
//!                      └──(next action: on-hold)──▶ OnHold ──forward──▶ Active
//! ```
//!
//! ## Layers
//!
//! - **State** (`state.rs`): [`ProjectState`], a tagged union whose variants
//!   carry per-state data, and its payload-free companion [`StateKind`].
//! - **Transition** (`transition.rs`): [`transition()`], a pure function from
//!   `(state, operation)` to `(state, event)`. All per-state behavior lives here.
//! - **Events** (`event.rs`): [`ProjectEvent`] and its [`Outcome`]
//!   classification. Illegal operations are explicit `Rejected` events, not
//!   silent no-ops.
//! - **Project** (`project.rs`): [`Project`], the context that owns the
//!   current state, records a transition log, and emits tracing spans.
//! - **Report** (`report.rs`): plain-text intake report rendering.
//!
//! ## Design
//!
//! There is exactly one live state at a time. A transition replaces it
//! wholesale; payload that belongs to a state (tasks, risks) is dropped with
//! it. Every `match` over [`ProjectState`] is exhaustive, so the transition
//! table is checked by the compiler rather than by convention.
//!
//! ## Crate Policy
//!
//! - No I/O. Console rendering is the caller's job.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod event;
pub mod operation;
pub mod project;
pub mod report;
pub mod state;
pub mod transition;

pub use error::ProjectError;
pub use event::{Outcome, ProjectEvent};
pub use operation::{Operation, OperationKind};
pub use project::{Project, ProjectTransitionRecord};
pub use report::render_intake_report;
pub use state::{
    ActiveAction, ActiveState, AtRiskState, DraftState, ProjectState, StateKind, TaskAssignment,
};
pub use transition::transition;
