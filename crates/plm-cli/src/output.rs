//! # Output
//!
//! Writes events to stdout (or any writer) in the selected format.
//!
//! - `text`: narration lines from [`crate::render`], then a closing
//!   `Final state:` line.
//! - `json`: one JSON object per event (JSON Lines), then a summary object
//!   holding the project id, final state and transition log.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use plm_core::{PlmError, ProjectId};
use plm_state::{Project, ProjectEvent, ProjectTransitionRecord, StateKind};

use crate::render::narrate;

/// Output format for events.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable narration.
    #[default]
    Text,
    /// JSON Lines.
    Json,
}

#[derive(Serialize)]
struct Summary<'a> {
    project: &'a ProjectId,
    state: StateKind,
    transitions: &'a [ProjectTransitionRecord],
}

/// Writes events in one output format.
pub struct Emitter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Emitter<W> {
    /// Create an emitter writing to `out`.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one event.
    pub fn event(&mut self, event: &ProjectEvent) -> Result<(), PlmError> {
        match self.format {
            OutputFormat::Text => {
                for line in narrate(event) {
                    writeln!(self.out, "{line}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Write the closing summary for `project` and flush.
    pub fn finish(&mut self, project: &Project) -> Result<(), PlmError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "Final state: {}", project.kind().label())?;
            }
            OutputFormat::Json => {
                let summary = Summary {
                    project: &project.id,
                    state: project.kind(),
                    transitions: project.transition_log(),
                };
                serde_json::to_writer(&mut self.out, &summary)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new(
            vec!["2025-10-10".to_string()],
            vec!["Engineering".to_string()],
            vec!["Security compliance".to_string()],
            "IT Upgrade",
        )
    }

    #[test]
    fn test_text_output() {
        let mut project = project();
        let mut emitter = Emitter::new(Vec::new(), OutputFormat::Text);
        let event = project.raise_risk("Budget overrun");
        emitter.event(&event).unwrap();
        emitter.finish(&project).unwrap();
        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(text, "Cannot raise risk in Draft state\nFinal state: Draft\n");
    }

    #[test]
    fn test_json_output_is_one_object_per_line() {
        let mut project = project();
        let mut emitter = Emitter::new(Vec::new(), OutputFormat::Json);
        let event = project.forward();
        emitter.event(&event).unwrap();
        emitter.finish(&project).unwrap();
        let text = String::from_utf8(emitter.into_inner()).unwrap();

        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "transitioned");
        assert_eq!(lines[0]["to"], "ACTIVE");
        assert_eq!(lines[1]["state"], "ACTIVE");
        assert_eq!(lines[1]["transitions"].as_array().unwrap().len(), 1);
    }
}
