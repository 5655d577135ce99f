//! Provisioned-object records produced by the expansion engine.

use serde::{Deserialize, Serialize};

/// Port-level record, one per physical source port ("A-record").
///
/// Addressed by the `(v, k)` coordinate pair. The `kind` discriminator is the
/// management-system type code written verbatim into the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Top-level coordinate: sector code concatenated with the position token.
    pub v: String,
    /// Branch-group index within `v`.
    pub k: u32,
    /// Selected source port (defaults to the catalog's first entry).
    pub src: String,
    /// Free-text extra parameters.
    pub extra: String,
    /// Management-system type code: "17" for motorized units, "1" for simple.
    pub kind: String,
}

impl SourceRecord {
    /// Type code written for motorized units.
    pub const KIND_MOTORIZED: &'static str = "17";
    /// Type code written for simple units.
    pub const KIND_SIMPLE: &'static str = "1";
}

/// Branch-level record, one per logical antenna branch ("B-record").
///
/// Carries the full `(v, k, t)` coordinate key plus the auxiliary `(n, u)`
/// pair used by the part6 cross-reference lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    /// Top-level coordinate: sector code concatenated with the position token.
    pub v: String,
    /// Branch-group index within `v`.
    pub k: u32,
    /// Sub-unit index within the `k` group.
    pub t: u32,
    /// Position-change counter within `v`.
    pub n: u32,
    /// Monotonic unit counter, reset together with `k`.
    pub u: u32,
    /// Selected antenna name tags, in selection order.
    pub names: Vec<String>,
    /// Site identifier, inherited from the row and independently editable.
    pub site: String,
    /// Free-text tilt value.
    pub tilt: String,
    /// Derived address (see the address resolver). Initialized to `site`.
    pub addr: String,
}

/// The full expansion output for one site plan.
///
/// Both collections are rebuilt atomically by every expansion pass; edits
/// mutate fields in place but never change the record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePlan {
    /// Port-level records in row-encounter order.
    pub sources: Vec<SourceRecord>,
    /// Branch-level records in row-encounter order.
    pub branches: Vec<BranchRecord>,
}

impl SitePlan {
    /// Returns true when the expansion produced no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.branches.is_empty()
    }
}
