//! Catalog file loaders.
//!
//! Two on-disk layouts are supported:
//!
//! - a single TOML file with `[[models]]`, `[[names]]`, and `[[sources]]`
//!   arrays of tables;
//! - a directory holding `models.csv`, `names.csv`, and `sources.csv` with
//!   headed columns, for catalogs maintained in spreadsheet tooling.
//!
//! Either way the loader fails fast: a missing file, a missing column, or a
//! malformed row aborts the whole run before any expansion happens.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{Catalog, ModelInfo};

/// TOML catalog document schema.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    models: Vec<ModelInfo>,
    #[serde(default)]
    names: Vec<NameEntry>,
    #[serde(default)]
    sources: Vec<SourceEntry>,
}

#[derive(Debug, Deserialize)]
struct NameEntry {
    tag: String,
}

#[derive(Debug, Deserialize)]
struct SourceEntry {
    port: String,
}

/// Loads a catalog from `path`.
///
/// A directory is read as the CSV layout, a file as the TOML layout.
pub fn load(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        anyhow::bail!("Catalog not found: {}", path.display());
    }
    if path.is_dir() {
        load_csv_dir(path)
    } else {
        load_toml_file(path)
    }
}

fn load_toml_file(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

    let names = file.names.into_iter().map(|n| n.tag).collect();
    let sources = file.sources.into_iter().map(|s| s.port).collect();

    let catalog = Catalog::new(file.models, names, sources)
        .with_context(|| format!("Invalid catalog in {}", path.display()))?;

    debug!(
        models = catalog.models().len(),
        names = catalog.names().len(),
        sources = catalog.sources().len(),
        "Loaded TOML catalog"
    );
    Ok(catalog)
}

fn load_csv_dir(dir: &Path) -> Result<Catalog> {
    let models = read_csv_records::<ModelInfo>(&dir.join("models.csv"))?;
    let names = read_csv_records::<NameEntry>(&dir.join("names.csv"))?
        .into_iter()
        .map(|n| n.tag)
        .collect();
    let sources = read_csv_records::<SourceEntry>(&dir.join("sources.csv"))?
        .into_iter()
        .map(|s| s.port)
        .collect();

    let catalog = Catalog::new(models, names, sources)
        .with_context(|| format!("Invalid catalog in {}", dir.display()))?;

    debug!(
        models = catalog.models().len(),
        names = catalog.names().len(),
        sources = catalog.sources().len(),
        "Loaded CSV catalog"
    );
    Ok(catalog)
}

/// Reads all records of one CSV table, deserializing by header name.
fn read_csv_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open catalog table {}", path.display()))?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let record: T = result.with_context(|| {
            format!("Malformed row {} in {}", line + 2, path.display())
        })?;
        records.push(record);
    }
    Ok(records)
}
