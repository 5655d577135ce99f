//! Coordinate-to-object expansion.
//!
//! A single left-to-right pass over the coordinate rows turns each row into
//! port records and branch records, assigning the hierarchical `(V, K, T)`
//! keys and the auxiliary `(N, U)` counters. The pass is order-sensitive:
//! the counters carry across rows and reset on direction or position changes,
//! so reordering rows changes the output.

use anyhow::Result;
use tracing::debug;

use crate::catalog::Catalog;
use crate::engine::address;
use crate::models::{BranchRecord, CoordinateRow, SitePlan, SourceRecord};

/// Expands coordinate rows into a fresh [`SitePlan`].
///
/// Counter reset rule, evaluated per row against the previous processed row:
/// a direction change resets `k`, `n`, and `u` to 1; otherwise a position
/// change resets `k` and `u` to 1 and increments `n`; otherwise the counters
/// continue. Rows without a model are incomplete and are skipped without
/// consuming a coordinate slot or entering the reset comparison.
///
/// # Errors
///
/// Fails on the first row referencing a model absent from the catalog; no
/// partial output is returned.
pub fn expand(rows: &[CoordinateRow], catalog: &Catalog) -> Result<SitePlan> {
    let mut plan = SitePlan::default();
    let (mut curr_k, mut curr_n, mut curr_u) = (1u32, 1u32, 1u32);
    let mut last_dir: Option<&str> = None;
    let mut last_pos: Option<&str> = None;

    for (idx, row) in rows.iter().enumerate() {
        let Some(model_name) = row.model.as_deref() else {
            continue;
        };
        let model = catalog.model(model_name).ok_or_else(|| {
            anyhow::anyhow!(
                "Row {} references unknown model '{}' (site {}, direction {})",
                idx + 1,
                model_name,
                row.site,
                row.dir
            )
        })?;

        let dir_code = row.dir.code();
        if last_dir.is_some_and(|d| d != dir_code) {
            (curr_k, curr_n, curr_u) = (1, 1, 1);
        } else if last_pos.is_some_and(|p| p != row.pos) {
            (curr_k, curr_u) = (1, 1);
            curr_n += 1;
        }

        let v = format!("{dir_code}{}", row.pos);
        last_dir = Some(dir_code);
        last_pos = Some(row.pos.as_str());

        let src = row
            .source
            .clone()
            .unwrap_or_else(|| catalog.default_source().to_string());
        let extra = row.extra.clone().unwrap_or_default();
        let tilt = row.tilt.clone().unwrap_or_default();
        let addr = address::resolve(&row.site, &row.names);

        if model.is_motorized() {
            // One port record for the whole unit, one branch record per motor.
            plan.sources.push(SourceRecord {
                v: v.clone(),
                k: curr_k,
                src,
                extra,
                kind: SourceRecord::KIND_MOTORIZED.to_string(),
            });
            for t in 1..=model.motor {
                plan.branches.push(BranchRecord {
                    v: v.clone(),
                    k: curr_k,
                    t,
                    n: curr_n,
                    u: curr_u,
                    names: row.names.clone(),
                    site: row.site.clone(),
                    tilt: tilt.clone(),
                    addr: addr.clone(),
                });
                curr_u += 1;
            }
            curr_k += 1;
        } else {
            // Paired port and branch record per motor, each in its own k slot.
            for _ in 0..model.motor {
                plan.sources.push(SourceRecord {
                    v: v.clone(),
                    k: curr_k,
                    src: src.clone(),
                    extra: extra.clone(),
                    kind: SourceRecord::KIND_SIMPLE.to_string(),
                });
                plan.branches.push(BranchRecord {
                    v: v.clone(),
                    k: curr_k,
                    t: 1,
                    n: curr_n,
                    u: curr_u,
                    names: row.names.clone(),
                    site: row.site.clone(),
                    tilt: tilt.clone(),
                    addr: addr.clone(),
                });
                curr_u += 1;
                curr_k += 1;
            }
        }
    }

    debug!(
        sources = plan.sources.len(),
        branches = plan.branches.len(),
        "Expansion complete"
    );
    Ok(plan)
}
