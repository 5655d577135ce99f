//! Script assembly: turns a site plan into the provisioning command text.
//!
//! The output is nine ordered sections, each introduced by a literal
//! `#part<i>` header and holding one command line per record, with a blank
//! line between sections. The object and attribute tokens belong to the
//! target management system's vocabulary and are kept in a swappable
//! [`ScriptVocabulary`] value rather than hard-coded at the call sites.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::SitePlan;

/// Object-type labels and attribute names of the target management system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptVocabulary {
    /// Object label addressed by the `V` coordinate.
    pub obj_group: String,
    /// Object label addressed by the `K` coordinate.
    pub obj_unit: String,
    /// Object label addressed by the `T` coordinate.
    pub obj_branch: String,
    /// Attribute carrying the source port.
    pub attr_source: String,
    /// Attribute carrying the extra parameters.
    pub attr_extra: String,
    /// Attribute carrying the unit type code.
    pub attr_type: String,
    /// Attribute carrying the joined antenna names.
    pub attr_name: String,
    /// Attribute carrying the site identifier.
    pub attr_site: String,
    /// Attribute carrying the tilt value.
    pub attr_tilt: String,
    /// Attribute carrying the derived address.
    pub attr_address: String,
    /// Delimiter joining multiple antenna names in part5.
    pub name_delimiter: String,
}

impl Default for ScriptVocabulary {
    fn default() -> Self {
        Self {
            obj_group: "AntennaUnit".to_string(),
            obj_unit: "RetDevice".to_string(),
            obj_branch: "RetSubUnit".to_string(),
            attr_source: "source".to_string(),
            attr_extra: "extra".to_string(),
            attr_type: "type".to_string(),
            attr_name: "name".to_string(),
            attr_site: "site".to_string(),
            attr_tilt: "tilt".to_string(),
            attr_address: "address".to_string(),
            name_delimiter: ";".to_string(),
        }
    }
}

/// Assembles the nine script sections for a site plan.
///
/// Sections are built as an explicit ordered list and joined in index order;
/// an empty section still emits its `#part<i>` header so the output shape is
/// stable for downstream tooling.
#[must_use]
pub fn assemble(plan: &SitePlan, vocab: &ScriptVocabulary) -> String {
    let a = &plan.sources;
    let b = &plan.branches;

    let sections: [Vec<String>; 9] = [
        dedup_first_seen(
            b.iter()
                .map(|r| format!("cr {}={}", vocab.obj_group, r.v))
                .collect(),
        ),
        dedup_first_seen(
            b.iter()
                .map(|r| format!("cr {}={},{}={}", vocab.obj_group, r.v, vocab.obj_unit, r.k))
                .collect(),
        ),
        a.iter()
            .map(|r| {
                format!(
                    "set {}={},{}={} {}={}",
                    vocab.obj_group, r.v, vocab.obj_unit, r.k, vocab.attr_source, r.src
                )
            })
            .collect(),
        a.iter()
            .map(|r| {
                format!(
                    "set {}={},{}={} {}={}",
                    vocab.obj_group, r.v, vocab.obj_unit, r.k, vocab.attr_extra, r.extra
                )
            })
            .collect(),
        a.iter()
            .map(|r| {
                format!(
                    "set {}={},{}={} {}={}",
                    vocab.obj_group, r.v, vocab.obj_unit, r.k, vocab.attr_type, r.kind
                )
            })
            .collect(),
        b.iter()
            .map(|r| {
                let name_clause = if r.names.is_empty() {
                    String::new()
                } else {
                    format!(
                        " {}={}",
                        vocab.attr_name,
                        r.names.join(&vocab.name_delimiter)
                    )
                };
                format!(
                    "set {}={},{}={},{}={}{} {}={}",
                    vocab.obj_group,
                    r.v,
                    vocab.obj_unit,
                    r.k,
                    vocab.obj_branch,
                    r.t,
                    name_clause,
                    vocab.attr_site,
                    r.site
                )
            })
            .collect(),
        // Cross-reference lines use the literal coordinate letters, not the
        // object vocabulary.
        b.iter()
            .map(|r| {
                format!(
                    "set V={},N={},U={} ref V={},K={},T={}",
                    r.v, r.n, r.u, r.v, r.k, r.t
                )
            })
            .collect(),
        b.iter()
            .map(|r| {
                format!(
                    "set {}={},{}={},{}={} {}={}",
                    vocab.obj_group,
                    r.v,
                    vocab.obj_unit,
                    r.k,
                    vocab.obj_branch,
                    r.t,
                    vocab.attr_tilt,
                    r.tilt
                )
            })
            .collect(),
        b.iter()
            .map(|r| {
                format!(
                    "set {}={},{}={},{}={} {}={}",
                    vocab.obj_group,
                    r.v,
                    vocab.obj_unit,
                    r.k,
                    vocab.obj_branch,
                    r.t,
                    vocab.attr_address,
                    r.addr
                )
            })
            .collect(),
    ];

    sections
        .iter()
        .enumerate()
        .map(|(i, lines)| format!("#part{i}\n{}", lines.join("\n")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Keeps the first occurrence of each line, preserving encounter order.
fn dedup_first_seen(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}
