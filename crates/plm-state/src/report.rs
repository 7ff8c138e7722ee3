//! # Intake Report
//!
//! Plain-text rendering of a draft project's intake data. Three labeled
//! sections under a fixed header, one item per line, no escaping.
//!
//! ```text
//! Project Intake Review
//!
//! Deadlines
//! 2025-10-10
//!
//! Departments Involved
//! Engineering
//!
//! Client Requirements
//! Security compliance
//! ```

/// First line of every intake report.
pub const REPORT_HEADER: &str = "Project Intake Review\n";

/// Section label for deadlines.
pub const DEADLINES_LABEL: &str = "Deadlines";

/// Section label for the departments involved.
pub const DEPARTMENTS_LABEL: &str = "Departments Involved";

/// Section label for client requirements.
pub const REQUIREMENTS_LABEL: &str = "Client Requirements";

/// Render the intake report for the given draft data.
pub fn render_intake_report(
    deadlines: &[String],
    departments: &[String],
    client_requirements: &[String],
) -> String {
    let mut out = String::from(REPORT_HEADER);
    push_section(&mut out, DEADLINES_LABEL, deadlines);
    push_section(&mut out, DEPARTMENTS_LABEL, departments);
    push_section(&mut out, REQUIREMENTS_LABEL, client_requirements);
    out
}

fn push_section(out: &mut String, label: &str, items: &[String]) {
    out.push('\n');
    out.push_str(label);
    out.push('\n');
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
}
