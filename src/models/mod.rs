//! Data models for coordinate rows, provisioned-object records, and sector
//! directions.
//!
//! Models are independent of file I/O and of the CLI; the expansion engine and
//! the script assembler operate purely on these types.

pub mod direction;
pub mod records;
pub mod row;

// Re-export all model types
pub use direction::Direction;
pub use records::{BranchRecord, SitePlan, SourceRecord};
pub use row::CoordinateRow;
