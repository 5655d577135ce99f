//! Plan files: the on-disk description of one generation run.
//!
//! A plan holds the ordered coordinate rows plus optional record edits that
//! are applied after expansion. Record edits address the expanded collections
//! by index because the `(v, k, t)` key is not unique across a plan (the
//! counters restart when a direction repeats).

pub mod validator;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine;
use crate::models::{CoordinateRow, SitePlan};

pub use validator::{PlanValidator, ValidationIssue, ValidationReport};

/// A parsed plan file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFile {
    /// Coordinate rows in processing order.
    #[serde(default)]
    pub rows: Vec<CoordinateRow>,
    /// Post-expansion record edits.
    #[serde(default)]
    pub edits: PlanEdits,
}

/// Index-addressed edits applied to the expanded record collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEdits {
    /// Edits to port records.
    #[serde(default)]
    pub sources: Vec<SourceEdit>,
    /// Edits to branch records.
    #[serde(default)]
    pub branches: Vec<BranchEdit>,
}

impl PlanEdits {
    /// Returns true when no edits are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.branches.is_empty()
    }
}

/// One edit to a port record, addressed by its 0-based expansion index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEdit {
    /// Index into the expanded port-record list.
    pub index: usize,
    /// Replacement source port.
    #[serde(default)]
    pub source: Option<String>,
    /// Replacement extra parameters.
    #[serde(default)]
    pub extra: Option<String>,
}

/// One edit to a branch record, addressed by its 0-based expansion index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEdit {
    /// Index into the expanded branch-record list.
    pub index: usize,
    /// Replacement antenna name selection.
    #[serde(default)]
    pub names: Option<Vec<String>>,
    /// Replacement tilt value.
    #[serde(default)]
    pub tilt: Option<String>,
    /// Replacement site identifier.
    #[serde(default)]
    pub site: Option<String>,
}

impl PlanFile {
    /// Loads a plan from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse plan file {}", path.display()))
    }

    /// Applies the record edits to an expanded site plan, in file order.
    ///
    /// Any edit touching a branch's `site` or `names` re-derives its address
    /// through the resolver, keeping `addr` consistent with the new inputs.
    ///
    /// # Errors
    ///
    /// Fails on the first edit whose index is outside the expanded
    /// collection.
    pub fn apply_edits(&self, plan: &mut SitePlan) -> Result<()> {
        for edit in &self.edits.sources {
            let len = plan.sources.len();
            let record = plan.sources.get_mut(edit.index).ok_or_else(|| {
                anyhow::anyhow!(
                    "Source edit index {} out of range ({} port records)",
                    edit.index,
                    len
                )
            })?;
            if let Some(source) = &edit.source {
                record.src.clone_from(source);
            }
            if let Some(extra) = &edit.extra {
                record.extra.clone_from(extra);
            }
        }

        for edit in &self.edits.branches {
            let len = plan.branches.len();
            let record = plan.branches.get_mut(edit.index).ok_or_else(|| {
                anyhow::anyhow!(
                    "Branch edit index {} out of range ({} branch records)",
                    edit.index,
                    len
                )
            })?;
            if let Some(names) = &edit.names {
                record.names.clone_from(names);
            }
            if let Some(tilt) = &edit.tilt {
                record.tilt.clone_from(tilt);
            }
            if let Some(site) = &edit.site {
                record.site.clone_from(site);
            }
            if edit.names.is_some() || edit.site.is_some() {
                record.addr = engine::resolve(&record.site, &record.names);
            }
        }

        Ok(())
    }
}
