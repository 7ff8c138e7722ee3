//! # Demo Subcommand
//!
//! The intake walkthrough: check status, forward to Active, check status,
//! raise a budget risk, forward again, check status.
//!
//! With the default sub-action the second forward lands in Submitted even
//! though a risk is recorded. `--next-action at-risk` sends it to AtRisk
//! instead.

use std::io::Write;

use clap::Args;

use plm_core::PlmError;
use plm_state::{ActiveAction, Operation, Project};

use crate::intake::IntakeArgs;
use crate::output::{Emitter, OutputFormat};

/// Risk raised once the project is Active.
pub const DEMO_RISK: &str = "Budget overrun";

/// Arguments for the demo subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct DemoArgs {
    #[command(flatten)]
    pub intake: IntakeArgs,

    /// Where the Active project goes on the second forward.
    #[arg(long, value_name = "ACTION")]
    pub next_action: Option<ActiveAction>,
}

/// The operations the demo applies, in order.
pub fn script(next_action: Option<ActiveAction>) -> Vec<Operation> {
    let mut ops = vec![
        Operation::Status,
        Operation::Forward,
        Operation::Status,
        Operation::RaiseRisk {
            risk: DEMO_RISK.to_string(),
        },
    ];
    if let Some(action) = next_action {
        ops.push(Operation::SetNextAction { action });
    }
    ops.push(Operation::Forward);
    ops.push(Operation::Status);
    ops
}

/// Run the walkthrough, writing events to `out`. Returns the final project.
pub fn run_demo<W: Write>(
    args: &DemoArgs,
    format: OutputFormat,
    out: W,
) -> Result<Project, PlmError> {
    let mut project = args.intake.to_project();
    let mut emitter = Emitter::new(out, format);
    tracing::info!(project = %project.id, "starting demo walkthrough");

    for operation in script(args.next_action) {
        let event = project.apply(operation);
        emitter.event(&event)?;
    }

    emitter.finish(&project)?;
    Ok(project)
}
