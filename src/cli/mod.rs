//! CLI command handlers for rupgen.
//!
//! This module provides headless, scriptable access to the generator's core
//! functionality for automation, testing, and CI integration.

pub mod address;
pub mod catalog;
pub mod common;
pub mod expand;
pub mod generate;
pub mod validate;

// Re-export types used by main.rs and tests
pub use address::AddressArgs;
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use expand::ExpandArgs;
pub use generate::GenerateArgs;
pub use validate::ValidateArgs;
