//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog used across the CLI tests: one motorized model, two simple ones,
/// a handful of antenna name tags, and two source ports.
pub const CATALOG_TOML: &str = r#"
[[models]]
name = "AHP-4T4R"
motor = 2
kind = "M"

[[models]]
name = "APX-16DW"
motor = 1
kind = "S"

[[models]]
name = "TTA-2X"
motor = 2
kind = "S"

[[names]]
tag = "LBB_1_7"

[[names]]
tag = "MBB_3_2_4"

[[names]]
tag = "HBB_1_2_3"

[[names]]
tag = "PLAIN"

[[sources]]
port = "RF-A"

[[sources]]
port = "RF-B"
"#;

/// Writes the shared TOML catalog into `dir` and returns its path.
pub fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.toml");
    fs::write(&path, CATALOG_TOML).expect("write catalog fixture");
    path
}

/// Writes the shared catalog as a CSV directory and returns its path.
pub fn write_csv_catalog(dir: &Path) -> PathBuf {
    let csv_dir = dir.join("catalog");
    fs::create_dir_all(&csv_dir).expect("create csv catalog dir");
    fs::write(
        csv_dir.join("models.csv"),
        "name,motor,kind\nAHP-4T4R,2,M\nAPX-16DW,1,S\nTTA-2X,2,S\n",
    )
    .expect("write models.csv");
    fs::write(
        csv_dir.join("names.csv"),
        "tag\nLBB_1_7\nMBB_3_2_4\nHBB_1_2_3\nPLAIN\n",
    )
    .expect("write names.csv");
    fs::write(csv_dir.join("sources.csv"), "port\nRF-A\nRF-B\n").expect("write sources.csv");
    csv_dir
}

/// Writes a plan file with the given TOML body and returns its path.
pub fn write_plan(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("plan.toml");
    fs::write(&path, body).expect("write plan fixture");
    path
}

/// A four-row plan exercising the motorized rule, counter continuation,
/// a position change, and a direction change.
pub const BASIC_PLAN_TOML: &str = r#"
[[rows]]
site = "KTX042"
model = "AHP-4T4R"
pos = "5"
dir = "Beta"
names = ["LBB_1_7"]
tilt = "40"

[[rows]]
site = "KTX042"
model = "APX-16DW"
pos = "5"
dir = "Beta"

[[rows]]
site = "KTX042"
model = "APX-16DW"
pos = "6"
dir = "Beta"

[[rows]]
site = "KTX042"
model = "APX-16DW"
pos = "1"
dir = "Gamma"
"#;

/// Creates a temp dir holding the shared catalog and the basic plan.
///
/// Returns (plan path, catalog path, guard). Keep the guard alive for the
/// duration of the test.
pub fn basic_setup() -> (PathBuf, PathBuf, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let catalog = write_catalog(temp.path());
    let plan = write_plan(temp.path(), BASIC_PLAN_TOML);
    (plan, catalog, temp)
}
