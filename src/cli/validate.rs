//! Validation command for plan files.

use crate::cli::common::{CliError, CliResult};
use crate::plan::{PlanFile, PlanValidator};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a plan file against a catalog
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the plan TOML file
    #[arg(short, long, value_name = "FILE")]
    pub plan: PathBuf,

    /// Path to the catalog (TOML file or CSV directory)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON response shape for `validate --json`.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    messages: Vec<ValidationMessage>,
}

#[derive(Debug, Serialize)]
struct ValidationMessage {
    severity: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = crate::catalog::load(&self.catalog)
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;
        let plan_file = PlanFile::load(&self.plan)
            .map_err(|e| CliError::io(format!("Failed to load plan: {e:#}")))?;

        let report = PlanValidator::new(&plan_file, &catalog).validate();

        let mut messages = Vec::new();
        for issue in &report.errors {
            messages.push(ValidationMessage {
                severity: "error".to_string(),
                message: issue.message.clone(),
                row: issue.row,
            });
        }
        for issue in &report.warnings {
            messages.push(ValidationMessage {
                severity: "warning".to_string(),
                message: issue.message.clone(),
                row: issue.row,
            });
        }

        let response = ValidationResponse {
            valid: report.is_valid(),
            messages,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.valid {
            println!("✓ Validation passed");
            print_messages(&response.messages);
        } else {
            println!("✗ Validation failed");
            print_messages(&response.messages);
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }
        if self.strict && !response.messages.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

fn print_messages(messages: &[ValidationMessage]) {
    if messages.is_empty() {
        return;
    }
    println!("\nIssues:");
    for msg in messages {
        let prefix = if msg.severity == "error" {
            "  ✗"
        } else {
            "  ⚠"
        };
        match msg.row {
            Some(row) => println!("{prefix} [row {row}] {}", msg.message),
            None => println!("{prefix} {}", msg.message),
        }
    }
}
