//! Catalog inspection command.

use crate::cli::common::{CliError, CliResult};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List the catalog's lookup tables
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Path to the catalog (TOML file or CSV directory)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Output tables as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response shape for `catalog --json`.
#[derive(Debug, Serialize)]
struct CatalogResponse<'a> {
    models: &'a [crate::catalog::ModelInfo],
    names: &'a [String],
    sources: &'a [String],
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = crate::catalog::load(&self.catalog)
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;

        if self.json {
            let response = CatalogResponse {
                models: catalog.models(),
                names: catalog.names(),
                sources: catalog.sources(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Models ({}):", catalog.models().len());
        for model in catalog.models() {
            let rule = if model.is_motorized() {
                "motorized"
            } else {
                "simple"
            };
            println!("  {} motor={} kind={} ({rule})", model.name, model.motor, model.kind);
        }

        println!();
        println!("Antenna names ({}):", catalog.names().len());
        for tag in catalog.names() {
            println!("  {tag}");
        }

        println!();
        println!("Source ports ({}):", catalog.sources().len());
        for (idx, port) in catalog.sources().iter().enumerate() {
            if idx == 0 {
                println!("  {port} (default)");
            } else {
                println!("  {port}");
            }
        }

        Ok(())
    }
}
