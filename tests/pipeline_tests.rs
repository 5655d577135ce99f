//! Library-level tests covering the whole expansion-to-script pipeline.

use rupgen::catalog::{Catalog, ModelInfo};
use rupgen::engine;
use rupgen::models::{CoordinateRow, Direction};
use rupgen::plan::{BranchEdit, PlanEdits, PlanFile};
use rupgen::script::{self, ScriptVocabulary};

fn catalog() -> Catalog {
    Catalog::new(
        vec![
            ModelInfo {
                name: "AHP-4T4R".to_string(),
                motor: 2,
                kind: "M".to_string(),
            },
            ModelInfo {
                name: "APX-16DW".to_string(),
                motor: 1,
                kind: "S".to_string(),
            },
        ],
        vec!["LBB_1_7".to_string(), "MBB_3_2_4".to_string()],
        vec!["RF-A".to_string(), "RF-B".to_string()],
    )
    .unwrap()
}

fn rows() -> Vec<CoordinateRow> {
    vec![
        CoordinateRow::new("KTX042", "AHP-4T4R", "5", Direction::Beta),
        CoordinateRow::new("KTX042", "APX-16DW", "5", Direction::Beta),
    ]
}

#[test]
fn test_re_expansion_rebuilds_collections() {
    let catalog = catalog();
    let rows = rows();

    let first = engine::expand(&rows, &catalog).unwrap();
    let second = engine::expand(&rows, &catalog).unwrap();

    // Re-running the expansion discards and rebuilds rather than appending.
    assert_eq!(first, second);
    assert_eq!(second.sources.len(), 2);
    assert_eq!(second.branches.len(), 3);
}

#[test]
fn test_edits_survive_assembly() {
    let catalog = catalog();
    let plan_file = PlanFile {
        rows: rows(),
        edits: PlanEdits {
            sources: vec![],
            branches: vec![BranchEdit {
                index: 2,
                names: Some(vec!["MBB_3_2_4".to_string()]),
                tilt: Some("20".to_string()),
                site: Some("KTX042B".to_string()),
            }],
        },
    };

    let mut expanded = engine::expand(&plan_file.rows, &catalog).unwrap();
    plan_file.apply_edits(&mut expanded).unwrap();
    let text = script::assemble(&expanded, &ScriptVocabulary::default());

    assert!(text.contains("set AntennaUnit=25,RetDevice=2,RetSubUnit=1 name=MBB_3_2_4 site=KTX042B"));
    assert!(text.contains("set AntennaUnit=25,RetDevice=2,RetSubUnit=1 tilt=20"));
    assert!(text.contains("set AntennaUnit=25,RetDevice=2,RetSubUnit=1 address=KTX042B_GAMMA_AWS"));
}

#[test]
fn test_section_order_is_stable() {
    let catalog = catalog();
    let expanded = engine::expand(&rows(), &catalog).unwrap();
    let text = script::assemble(&expanded, &ScriptVocabulary::default());

    let positions: Vec<usize> = (0..9)
        .map(|i| text.find(&format!("#part{i}")).expect("section present"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "sections emitted in index order");
}
