//! # plm-cli: Project Lifecycle Command-Line Interface
//!
//! Drives a [`plm_state::Project`] from the command line and narrates what
//! happens.
//!
//! ## Subcommands
//!
//! - `demo`: replays the intake walkthrough (status, forward, status, raise
//!   a budget risk, forward, status).
//! - `run`: apply an arbitrary sequence of operations given as text.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from execution: handlers take parsed
//!   args and any `io::Write`, so they are testable without a terminal.
//! - No state-machine logic here. Handlers call `plm-state` and render the
//!   events it returns.

pub mod demo;
pub mod intake;
pub mod output;
pub mod render;
pub mod run;
