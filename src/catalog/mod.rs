//! Equipment catalog: the three lookup tables the generator depends on.
//!
//! The catalog is loaded once before any expansion runs and is read-only from
//! then on. It provides O(1) model lookup and membership checks for name tags
//! and source ports.

pub mod loader;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use loader::load;

/// One equipment model definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model name, the unique key rows reference.
    pub name: String,
    /// Number of antenna branches driven by this model.
    pub motor: u32,
    /// Category code. "M" (case-insensitive) selects the motorized
    /// expansion rule; any other value selects the simple rule.
    pub kind: String,
}

impl ModelInfo {
    /// Returns true when this model expands under the motorized rule.
    #[must_use]
    pub fn is_motorized(&self) -> bool {
        self.kind.eq_ignore_ascii_case("M")
    }
}

/// The loaded lookup tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Equipment model definitions.
    models: Vec<ModelInfo>,
    /// Antenna name tags offered for branch records.
    names: Vec<String>,
    /// Source ports offered for port records; the first entry is the default.
    sources: Vec<String>,
    /// Fast model lookup by name.
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from the three tables, validating them up front.
    ///
    /// # Errors
    ///
    /// Returns an error when the source table is empty, a model name is empty
    /// or duplicated, or a model has a zero branch count. Validation failures
    /// abort before any expansion can run.
    pub fn new(models: Vec<ModelInfo>, names: Vec<String>, sources: Vec<String>) -> Result<Self> {
        if sources.is_empty() {
            anyhow::bail!("Catalog has no source ports; at least one is required");
        }

        let mut lookup = HashMap::new();
        for (idx, model) in models.iter().enumerate() {
            if model.name.trim().is_empty() {
                anyhow::bail!("Catalog model at index {idx} has an empty name");
            }
            if model.motor < 1 {
                anyhow::bail!(
                    "Model '{}' has branch count {}; must be at least 1",
                    model.name,
                    model.motor
                );
            }
            if lookup.insert(model.name.clone(), idx).is_some() {
                anyhow::bail!("Duplicate model name '{}' in catalog", model.name);
            }
        }

        Ok(Self {
            models,
            names,
            sources,
            lookup,
        })
    }

    /// Looks up a model by name.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&ModelInfo> {
        self.lookup.get(name).map(|&idx| &self.models[idx])
    }

    /// Returns all model definitions in table order.
    #[must_use]
    pub fn models(&self) -> &[ModelInfo] {
        &self.models
    }

    /// Returns all antenna name tags in table order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns all source ports in table order.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Returns the default source port for newly expanded port records.
    #[must_use]
    pub fn default_source(&self) -> &str {
        &self.sources[0]
    }

    /// Returns true when `tag` is present in the name table.
    #[must_use]
    pub fn has_name_tag(&self, tag: &str) -> bool {
        self.names.iter().any(|n| n == tag)
    }

    /// Returns true when `port` is present in the source table.
    #[must_use]
    pub fn has_source(&self, port: &str) -> bool {
        self.sources.iter().any(|s| s == port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, motor: u32, kind: &str) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            motor,
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_new_valid() {
        let catalog = Catalog::new(
            vec![model("AHP-4T4R", 2, "M"), model("APX-16DW", 1, "S")],
            vec!["LBB_1_7".to_string()],
            vec!["RF-A".to_string(), "RF-B".to_string()],
        )
        .unwrap();

        assert_eq!(catalog.model("AHP-4T4R").unwrap().motor, 2);
        assert!(catalog.model("AHP-4T4R").unwrap().is_motorized());
        assert!(!catalog.model("APX-16DW").unwrap().is_motorized());
        assert!(catalog.model("missing").is_none());
        assert_eq!(catalog.default_source(), "RF-A");
    }

    #[test]
    fn test_motorized_is_case_insensitive() {
        assert!(model("X", 1, "m").is_motorized());
        assert!(model("X", 1, "M").is_motorized());
        assert!(!model("X", 1, "Mx").is_motorized());
    }

    #[test]
    fn test_rejects_empty_sources() {
        let err = Catalog::new(vec![], vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("no source ports"));
    }

    #[test]
    fn test_rejects_duplicate_model() {
        let err = Catalog::new(
            vec![model("A", 1, "S"), model("A", 2, "M")],
            vec![],
            vec!["RF-A".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate model name"));
    }

    #[test]
    fn test_rejects_zero_motor() {
        let err = Catalog::new(
            vec![model("A", 0, "S")],
            vec![],
            vec!["RF-A".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_membership_checks() {
        let catalog = Catalog::new(
            vec![],
            vec!["LBB_1_7".to_string()],
            vec!["RF-A".to_string()],
        )
        .unwrap();
        assert!(catalog.has_name_tag("LBB_1_7"));
        assert!(!catalog.has_name_tag("LBB_2_7"));
        assert!(catalog.has_source("RF-A"));
        assert!(!catalog.has_source("RF-Z"));
    }
}
