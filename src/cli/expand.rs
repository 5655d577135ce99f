//! Expand command: run the expansion engine and show the record collections.

use crate::cli::common::{CliError, CliResult};
use crate::engine;
use crate::plan::PlanFile;
use clap::Args;
use std::path::PathBuf;

/// Expand a plan into its port and branch records without generating a script
#[derive(Debug, Clone, Args)]
pub struct ExpandArgs {
    /// Path to the plan TOML file
    #[arg(short, long, value_name = "FILE")]
    pub plan: PathBuf,

    /// Path to the catalog (TOML file or CSV directory)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Output records as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExpandArgs {
    /// Execute the expand command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = crate::catalog::load(&self.catalog)
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;
        let plan_file = PlanFile::load(&self.plan)
            .map_err(|e| CliError::io(format!("Failed to load plan: {e:#}")))?;

        let mut expanded = engine::expand(&plan_file.rows, &catalog)
            .map_err(|e| CliError::validation(format!("Expansion failed: {e:#}")))?;
        plan_file
            .apply_edits(&mut expanded)
            .map_err(|e| CliError::validation(format!("Failed to apply edits: {e:#}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&expanded)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Port records ({}):", expanded.sources.len());
        for (idx, r) in expanded.sources.iter().enumerate() {
            println!(
                "  A[{idx}] V={} K={} src={} type={} extra={}",
                r.v, r.k, r.src, r.kind, r.extra
            );
        }

        println!();
        println!("Branch records ({}):", expanded.branches.len());
        for (idx, r) in expanded.branches.iter().enumerate() {
            let names = if r.names.is_empty() {
                "-".to_string()
            } else {
                r.names.join(",")
            };
            println!(
                "  B[{idx}] V={} K={} T={} N={} U={} site={} names={} tilt={} addr={}",
                r.v, r.k, r.t, r.n, r.u, r.site, names, r.tilt, r.addr
            );
        }

        Ok(())
    }
}
