//! # plm-core: Foundational Types for the Project Lifecycle Machine
//!
//! The leaf of the workspace DAG. Defines the small set of primitives that
//! the state machine and the CLI share, so that neither has to pass bare
//! strings or raw `DateTime` values across crate boundaries.
//!
//! ## Contents
//!
//! - [`ProjectId`]: newtype over a UUID v4. No bare strings for identifiers.
//! - [`Timestamp`]: UTC-only, seconds precision. Used by the transition log.
//! - [`Task`]: the caller-supplied collaborator handed to task assignment.
//! - [`PlmError`]: top-level error type, derived with `thiserror`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `plm-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod task;
pub mod temporal;

pub use error::PlmError;
pub use identity::ProjectId;
pub use task::Task;
pub use temporal::Timestamp;
