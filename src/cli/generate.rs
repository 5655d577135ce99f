//! Generate command: the full plan-to-script pipeline.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::engine;
use crate::plan::{PlanFile, PlanValidator};
use crate::script;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Generate the provisioning script from a plan file
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the plan TOML file
    #[arg(short, long, value_name = "FILE")]
    pub plan: PathBuf,

    /// Path to the catalog (TOML file or CSV directory)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output file for the script (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Use a stable banner timestamp for deterministic output (for testing)
    #[arg(long)]
    pub deterministic: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load_or_default();

        let catalog_path = self
            .catalog
            .clone()
            .or_else(|| config.paths.catalog.clone())
            .ok_or_else(|| {
                CliError::usage(format!(
                    "No catalog specified. Use --catalog or set paths.catalog in the {APP_BINARY_NAME} config"
                ))
            })?;

        let catalog = crate::catalog::load(&catalog_path)
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;
        let plan_file = PlanFile::load(&self.plan)
            .map_err(|e| CliError::io(format!("Failed to load plan: {e:#}")))?;

        // Validate before generating
        let report = PlanValidator::new(&plan_file, &catalog).validate();
        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "Plan validation failed:\n{}",
                report.format_message()
            )));
        }

        let mut expanded = engine::expand(&plan_file.rows, &catalog)
            .map_err(|e| CliError::validation(format!("Expansion failed: {e:#}")))?;
        plan_file
            .apply_edits(&mut expanded)
            .map_err(|e| CliError::validation(format!("Failed to apply edits: {e:#}")))?;

        let body = script::assemble(&expanded, &config.vocabulary);
        let output = format!("{}\n\n{body}\n", self.banner());

        info!(
            sources = expanded.sources.len(),
            branches = expanded.branches.len(),
            "Script assembled"
        );

        if let Some(out) = &self.out {
            std::fs::write(out, output)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", out.display())))?;
            println!("✓ Generated provisioning script");
            println!("  Output: {}", out.display());
        } else {
            print!("{output}");
        }

        Ok(())
    }

    /// Builds the banner comment line preceding part0.
    fn banner(&self) -> String {
        if self.deterministic {
            format!("# Generated: <timestamp> by {APP_BINARY_NAME}")
        } else {
            let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            format!("# Generated: {now} by {APP_BINARY_NAME}")
        }
    }
}
