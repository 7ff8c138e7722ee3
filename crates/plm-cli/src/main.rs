//! # plm CLI Entry Point
//!
//! Parses arguments, installs the tracing subscriber, and dispatches to the
//! handler modules.

use anyhow::Context;
use clap::{Parser, ValueEnum};

use plm_cli::output::OutputFormat;

/// Project lifecycle machine: drive a project through Draft, Submitted,
/// Active, AtRisk and OnHold and narrate what happens.
#[derive(Parser, Debug)]
#[command(name = "plm", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Event output format on stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Diagnostic log format on stderr. Verbosity follows RUST_LOG.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Replay the intake walkthrough.
    Demo(plm_cli::demo::DemoArgs),
    /// Apply a sequence of operations to a new project.
    Run(plm_cli::run::RunArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let stdout = std::io::stdout().lock();
    let project = match cli.command {
        Commands::Demo(args) => {
            plm_cli::demo::run_demo(&args, cli.format, stdout).context("demo walkthrough failed")?
        }
        Commands::Run(args) => {
            plm_cli::run::run_script(&args, cli.format, stdout).context("operation script failed")?
        }
    };

    tracing::info!(
        project = %project.id,
        state = %project.kind(),
        transitions = project.transition_count(),
        "finished"
    );
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
