//! Address derivation from antenna name tags.
//!
//! Antenna names encode a sector digit and a frequency suffix by convention,
//! e.g. `LBB_2_7` or `MBB_3_2_4`. The resolver extracts the band group from
//! the sector digit and classifies each tag into a frequency band, producing
//! an address of the form `<site>_<GROUP>_<band>[_<band>...]`.
//!
//! The function is pure: it never fails, keeps no state between calls, and
//! degrades to returning the site unchanged for empty or unmatched input.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::Direction;

/// Sentinel tag treated as "no selection".
const NONE_TAG: &str = "None";

fn sector_digit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_([1-6])").expect("hard-coded pattern compiles"))
}

/// Derives the canonical address for a branch record.
///
/// Tags are scanned in selection order. The band-group label comes from the
/// sector digit of the last tag containing one; every matching tag also
/// contributes one frequency band. Distinct bands are ordered by the fixed
/// priority 700 < 850 < AWS < PCS and joined with `_`.
///
/// Returns `site` unchanged when the selection is empty, contains the
/// sentinel tag `"None"`, or no tag carries a sector digit.
#[must_use]
pub fn resolve(site: &str, names: &[String]) -> String {
    if names.is_empty() || names.iter().any(|n| n == NONE_TAG) {
        return site.to_string();
    }

    let mut band_group: Option<&'static str> = None;
    let mut bands: Vec<&'static str> = Vec::new();

    for name in names {
        let Some(caps) = sector_digit_re().captures(name) else {
            continue;
        };
        // The capture is a single char in '1'..='6' by construction.
        let digit = caps[1].chars().next().unwrap_or('0');
        band_group = Direction::band_group_for_digit(digit);

        let band = classify_band(name, digit);
        if !bands.contains(&band) {
            bands.push(band);
        }
    }

    let Some(group) = band_group else {
        return site.to_string();
    };

    bands.sort_by_key(|b| band_priority(b));
    format!("{site}_{group}_{}", bands.join("_"))
}

/// Classifies a tag's frequency band from its suffix, first match wins.
fn classify_band(name: &str, digit: char) -> &'static str {
    if name.contains(&format!("_{digit}_2_3")) {
        "PCS"
    } else if ["2_4", "2_6", "2_8"]
        .iter()
        .any(|s| name.contains(&format!("_{digit}_{s}")))
    {
        "AWS"
    } else if name.contains(&format!("_{digit}_7")) {
        "850"
    } else {
        "700"
    }
}

/// Fixed band ordering for the joined suffix; unknown bands sort last.
fn band_priority(band: &str) -> u8 {
    match band {
        "700" => 1,
        "850" => 2,
        "AWS" => 3,
        "PCS" => 4,
        _ => u8::MAX,
    }
}
