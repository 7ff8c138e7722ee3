//! # Intake Arguments
//!
//! Draft intake data shared by every subcommand. Defaults reproduce the
//! IT upgrade walkthrough.

use clap::Args;

use plm_state::Project;

/// Intake data for the project under test.
#[derive(Args, Debug, Clone)]
pub struct IntakeArgs {
    /// Project deadline. Repeat for several.
    #[arg(long = "deadline", value_name = "DATE", default_value = "2025-10-10")]
    pub deadlines: Vec<String>,

    /// Department involved. Repeat for several.
    #[arg(long = "department", value_name = "NAME", default_value = "Engineering")]
    pub departments: Vec<String>,

    /// Client requirement. Repeat for several.
    #[arg(long = "requirement", value_name = "TEXT", default_value = "Security compliance")]
    pub requirements: Vec<String>,

    /// Project type.
    #[arg(long, value_name = "TYPE", default_value = "IT Upgrade")]
    pub project_type: String,
}

impl IntakeArgs {
    /// Build a Draft project from these arguments.
    pub fn to_project(&self) -> Project {
        Project::new(
            self.deadlines.clone(),
            self.departments.clone(),
            self.requirements.clone(),
            self.project_type.clone(),
        )
    }
}

impl Default for IntakeArgs {
    fn default() -> Self {
        Self {
            deadlines: vec!["2025-10-10".to_string()],
            departments: vec!["Engineering".to_string()],
            requirements: vec!["Security compliance".to_string()],
            project_type: "IT Upgrade".to_string(),
        }
    }
}
