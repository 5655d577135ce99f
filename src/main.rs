//! rupgen - Provisioning script generator for radio-unit site commissioning
//!
//! The operator describes a site as coordinate rows in a plan file; rupgen
//! expands them into addressable network objects and emits the provisioning
//! command script for the management system.

use clap::{Parser, Subcommand};
use rupgen::cli::{AddressArgs, CatalogArgs, ExpandArgs, GenerateArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// Provisioning script generator for radio-unit site commissioning
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the provisioning script from a plan file
    Generate(GenerateArgs),
    /// Expand a plan into its port and branch records
    Expand(ExpandArgs),
    /// Validate a plan file against a catalog
    Validate(ValidateArgs),
    /// List the catalog's lookup tables
    Catalog(CatalogArgs),
    /// Derive the canonical address for a site and name selection
    Address(AddressArgs),
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Expand(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Catalog(args) => args.execute(),
        Commands::Address(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}

/// Initializes stderr logging, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
