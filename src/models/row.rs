//! Coordinate rows: the operator-supplied description of physical equipment.

use crate::models::Direction;
use serde::{Deserialize, Serialize};

/// One physical equipment entry at a site.
///
/// Rows are processed strictly in input order by the expansion engine; the
/// coordinate counters carried between rows make the expansion order-sensitive,
/// so reordering rows changes the generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRow {
    /// Site identifier (free text, inherited by every branch record).
    pub site: String,
    /// Equipment model, a key into the catalog's model table.
    ///
    /// A row without a model is incomplete and is skipped by the expansion
    /// engine without consuming a coordinate slot.
    #[serde(default)]
    pub model: Option<String>,
    /// Position token within the sector (free text).
    #[serde(default)]
    pub pos: String,
    /// Sector direction.
    pub dir: Direction,
    /// Antenna name tags applied to every branch record this row generates.
    #[serde(default)]
    pub names: Vec<String>,
    /// Tilt value applied to every branch record this row generates.
    #[serde(default)]
    pub tilt: Option<String>,
    /// Source port applied to every source record this row generates.
    #[serde(default)]
    pub source: Option<String>,
    /// Extra parameters applied to every source record this row generates.
    #[serde(default)]
    pub extra: Option<String>,
}

impl CoordinateRow {
    /// Creates a bare row with just the coordinate fields set.
    #[must_use]
    pub fn new(
        site: impl Into<String>,
        model: impl Into<String>,
        pos: impl Into<String>,
        dir: Direction,
    ) -> Self {
        Self {
            site: site.into(),
            model: Some(model.into()),
            pos: pos.into(),
            dir,
            names: Vec::new(),
            tilt: None,
            source: None,
            extra: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_deserializes_with_defaults() {
        let row: CoordinateRow = toml::from_str(
            r#"
            site = "KTX042"
            model = "AHP-4T4R"
            pos = "5"
            dir = "Beta"
            "#,
        )
        .unwrap();

        assert_eq!(row.site, "KTX042");
        assert_eq!(row.model.as_deref(), Some("AHP-4T4R"));
        assert_eq!(row.pos, "5");
        assert_eq!(row.dir, Direction::Beta);
        assert!(row.names.is_empty());
        assert!(row.tilt.is_none());
    }

    #[test]
    fn test_row_without_model() {
        let row: CoordinateRow = toml::from_str(
            r#"
            site = "KTX042"
            pos = "1"
            dir = "Alpha"
            "#,
        )
        .unwrap();
        assert!(row.model.is_none());
    }
}
