//! Address derivation command.

use crate::cli::common::CliResult;
use crate::engine;
use clap::Args;

/// Derive the canonical address for a site and name selection
#[derive(Debug, Clone, Args)]
pub struct AddressArgs {
    /// Site identifier
    #[arg(short, long, value_name = "SITE")]
    pub site: String,

    /// Antenna name tags, in selection order
    #[arg(short, long, value_name = "TAG", num_args = 0..)]
    pub names: Vec<String>,
}

impl AddressArgs {
    /// Execute the address command
    pub fn execute(&self) -> CliResult<()> {
        println!("{}", engine::resolve(&self.site, &self.names));
        Ok(())
    }
}
