//! # Run Subcommand
//!
//! Applies a sequence of operations to a fresh Draft project:
//!
//! ```text
//! plm run forward "assign=Engineering,E-042,Provision servers" next-action=on-hold forward
//! ```
//!
//! Rejected operations are narrated and skipped. With `--strict` the first
//! rejection aborts the run.

use std::io::Write;

use clap::Args;

use plm_core::PlmError;
use plm_state::{Operation, Project};

use crate::intake::IntakeArgs;
use crate::output::{Emitter, OutputFormat};

/// Arguments for the run subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Operations to apply, in order: forward, status, draft-report,
    /// raise-risk=<text>, assign=<department>,<employee>,<task>,
    /// next-action=<submitted|at-risk|on-hold>.
    #[arg(required = true, value_name = "OP")]
    pub operations: Vec<Operation>,

    /// Fail on the first operation the current state rejects.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub intake: IntakeArgs,
}

/// Apply the operations, writing events to `out`. Returns the final project.
pub fn run_script<W: Write>(
    args: &RunArgs,
    format: OutputFormat,
    out: W,
) -> Result<Project, PlmError> {
    let mut project = args.intake.to_project();
    let mut emitter = Emitter::new(out, format);

    for (index, operation) in args.operations.iter().cloned().enumerate() {
        tracing::debug!(step = index + 1, operation = %operation.kind(), "applying operation");
        let event = project.apply(operation);
        emitter.event(&event)?;
        if args.strict {
            event.into_result()?;
        }
    }

    emitter.finish(&project)?;
    Ok(project)
}
