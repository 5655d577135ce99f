//! Pre-generation validation of a plan against a catalog.
//!
//! Validation runs before any expansion and collects every problem it can
//! find instead of stopping at the first, so the operator sees the full
//! picture in one pass. Errors block generation; warnings do not.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::engine;
use crate::plan::PlanFile;

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationIssue {
    /// Human-readable description.
    pub message: String,
    /// 1-based row number the finding refers to, when applicable.
    pub row: Option<usize>,
}

/// Collected validation output.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ValidationReport {
    /// Findings that block generation.
    pub errors: Vec<ValidationIssue>,
    /// Findings that do not block generation.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when no blocking findings were collected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats all findings as one message block.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut lines = Vec::new();
        for issue in &self.errors {
            lines.push(match issue.row {
                Some(row) => format!("error [row {row}]: {}", issue.message),
                None => format!("error: {}", issue.message),
            });
        }
        for issue in &self.warnings {
            lines.push(match issue.row {
                Some(row) => format!("warning [row {row}]: {}", issue.message),
                None => format!("warning: {}", issue.message),
            });
        }
        lines.join("\n")
    }
}

/// Validates a plan file against a loaded catalog.
pub struct PlanValidator<'a> {
    plan: &'a PlanFile,
    catalog: &'a Catalog,
}

impl<'a> PlanValidator<'a> {
    /// Creates a validator over the given plan and catalog.
    #[must_use]
    pub fn new(plan: &'a PlanFile, catalog: &'a Catalog) -> Self {
        Self { plan, catalog }
    }

    /// Runs all checks and returns the collected report.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.plan.rows.is_empty() {
            report.warnings.push(ValidationIssue {
                message: "Plan has no rows; the script will contain only section headers"
                    .to_string(),
                row: None,
            });
        }

        for (idx, row) in self.plan.rows.iter().enumerate() {
            let row_no = Some(idx + 1);
            match row.model.as_deref() {
                None => report.warnings.push(ValidationIssue {
                    message: "Row has no model and will be skipped".to_string(),
                    row: row_no,
                }),
                Some(name) if self.catalog.model(name).is_none() => {
                    report.errors.push(ValidationIssue {
                        message: format!("Unknown model '{name}'"),
                        row: row_no,
                    });
                }
                Some(_) => {}
            }

            if let Some(source) = &row.source {
                if !self.catalog.has_source(source) {
                    report.errors.push(ValidationIssue {
                        message: format!("Unknown source port '{source}'"),
                        row: row_no,
                    });
                }
            }
            self.check_tags(&row.names, row_no, &mut report);
        }

        self.check_edit_indices(&mut report);
        report
    }

    /// Checks a name selection against the catalog and the tag convention.
    fn check_tags(
        &self,
        names: &[String],
        row: Option<usize>,
        report: &mut ValidationReport,
    ) {
        let mut seen = HashSet::new();
        for tag in names {
            if !self.catalog.has_name_tag(tag) {
                report.errors.push(ValidationIssue {
                    message: format!("Unknown antenna name tag '{tag}'"),
                    row,
                });
            }
            if !seen.insert(tag) {
                report.warnings.push(ValidationIssue {
                    message: format!("Duplicate antenna name tag '{tag}' in selection"),
                    row,
                });
            }
        }
        // A selection that resolves to nothing still generates a valid
        // script (the address falls back to the site), so it is a warning.
        if !names.is_empty() && engine::resolve("x", names) == "x" {
            report.warnings.push(ValidationIssue {
                message: "Name selection carries no sector digit; address falls back to the site"
                    .to_string(),
                row,
            });
        }
    }

    /// Checks edit indices against the record counts a clean expansion
    /// would produce.
    fn check_edit_indices(&self, report: &mut ValidationReport) {
        let Ok(expanded) = engine::expand(&self.plan.rows, self.catalog) else {
            // Unknown models were already reported per row.
            return;
        };

        for edit in &self.plan.edits.sources {
            if edit.index >= expanded.sources.len() {
                report.errors.push(ValidationIssue {
                    message: format!(
                        "Source edit index {} out of range ({} port records)",
                        edit.index,
                        expanded.sources.len()
                    ),
                    row: None,
                });
            }
            if let Some(source) = &edit.source {
                if !self.catalog.has_source(source) {
                    report.errors.push(ValidationIssue {
                        message: format!("Unknown source port '{source}' in edit"),
                        row: None,
                    });
                }
            }
        }

        for edit in &self.plan.edits.branches {
            if edit.index >= expanded.branches.len() {
                report.errors.push(ValidationIssue {
                    message: format!(
                        "Branch edit index {} out of range ({} branch records)",
                        edit.index,
                        expanded.branches.len()
                    ),
                    row: None,
                });
            }
            if let Some(names) = &edit.names {
                self.check_tags(names, None, report);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelInfo;
    use crate::models::{CoordinateRow, Direction};
    use crate::plan::{BranchEdit, PlanEdits};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![ModelInfo {
                name: "SIMPLE-1".to_string(),
                motor: 1,
                kind: "S".to_string(),
            }],
            vec!["LBB_1_7".to_string(), "PLAIN".to_string()],
            vec!["RF-A".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_valid_plan_passes() {
        let plan = PlanFile {
            rows: vec![CoordinateRow::new("S", "SIMPLE-1", "1", Direction::Alpha)],
            edits: PlanEdits::default(),
        };
        let report = PlanValidator::new(&plan, &catalog()).validate();
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unknown_model_is_error() {
        let plan = PlanFile {
            rows: vec![CoordinateRow::new("S", "GHOST", "1", Direction::Alpha)],
            edits: PlanEdits::default(),
        };
        let report = PlanValidator::new(&plan, &catalog()).validate();
        assert!(!report.is_valid());
        assert!(report.errors[0].message.contains("GHOST"));
        assert_eq!(report.errors[0].row, Some(1));
    }

    #[test]
    fn test_missing_model_is_warning() {
        let mut row = CoordinateRow::new("S", "SIMPLE-1", "1", Direction::Alpha);
        row.model = None;
        let plan = PlanFile {
            rows: vec![row],
            edits: PlanEdits::default(),
        };
        let report = PlanValidator::new(&plan, &catalog()).validate();
        assert!(report.is_valid());
        assert!(report.warnings[0].message.contains("skipped"));
    }

    #[test]
    fn test_unknown_tag_is_error() {
        let mut row = CoordinateRow::new("S", "SIMPLE-1", "1", Direction::Alpha);
        row.names = vec!["NOPE_1_7".to_string()];
        let plan = PlanFile {
            rows: vec![row],
            edits: PlanEdits::default(),
        };
        let report = PlanValidator::new(&plan, &catalog()).validate();
        assert!(!report.is_valid());
    }

    #[test]
    fn test_digitless_selection_is_warning() {
        let mut row = CoordinateRow::new("S", "SIMPLE-1", "1", Direction::Alpha);
        row.names = vec!["PLAIN".to_string()];
        let plan = PlanFile {
            rows: vec![row],
            edits: PlanEdits::default(),
        };
        let report = PlanValidator::new(&plan, &catalog()).validate();
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("sector digit")));
    }

    #[test]
    fn test_out_of_range_edit_is_error() {
        let plan = PlanFile {
            rows: vec![CoordinateRow::new("S", "SIMPLE-1", "1", Direction::Alpha)],
            edits: PlanEdits {
                sources: vec![],
                branches: vec![BranchEdit {
                    index: 5,
                    names: None,
                    tilt: None,
                    site: None,
                }],
            },
        };
        let report = PlanValidator::new(&plan, &catalog()).validate();
        assert!(!report.is_valid());
        assert!(report.errors[0].message.contains("out of range"));
    }

    #[test]
    fn test_empty_plan_warns() {
        let plan = PlanFile::default();
        let report = PlanValidator::new(&plan, &catalog()).validate();
        assert!(report.is_valid());
        assert!(!report.warnings.is_empty());
    }
}
