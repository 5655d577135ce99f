//! Sector directions and the shared six-way band-group mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sector direction of a coordinate row.
///
/// Sites are sectorized into up to six directions. Each direction carries a
/// single-digit sector code that becomes the leading character of the `V`
/// coordinate, and a band-group label used by the address resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Sector code "1"
    #[default]
    Alpha,
    /// Sector code "2"
    Beta,
    /// Sector code "3"
    Gamma,
    /// Sector code "4"
    Delta,
    /// Sector code "5"
    Epsilon,
    /// Sector code "6"
    Zeta,
}

impl Direction {
    /// All directions in sector-code order.
    pub const ALL: [Direction; 6] = [
        Direction::Alpha,
        Direction::Beta,
        Direction::Gamma,
        Direction::Delta,
        Direction::Epsilon,
        Direction::Zeta,
    ];

    /// Returns the single-digit sector code ("1".."6").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Direction::Alpha => "1",
            Direction::Beta => "2",
            Direction::Gamma => "3",
            Direction::Delta => "4",
            Direction::Epsilon => "5",
            Direction::Zeta => "6",
        }
    }

    /// Returns the upper-case band-group label for this direction.
    #[must_use]
    pub const fn band_group(self) -> &'static str {
        match self {
            Direction::Alpha => "ALPHA",
            Direction::Beta => "BETA",
            Direction::Gamma => "GAMMA",
            Direction::Delta => "DELTA",
            Direction::Epsilon => "EPSILON",
            Direction::Zeta => "ZETA",
        }
    }

    /// Maps a sector-code digit back to its band-group label.
    ///
    /// Returns `None` for anything outside '1'..='6'.
    #[must_use]
    pub fn band_group_for_digit(digit: char) -> Option<&'static str> {
        let idx = digit.to_digit(10)? as usize;
        if (1..=6).contains(&idx) {
            Some(Direction::ALL[idx - 1].band_group())
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Alpha => "Alpha",
            Direction::Beta => "Beta",
            Direction::Gamma => "Gamma",
            Direction::Delta => "Delta",
            Direction::Epsilon => "Epsilon",
            Direction::Zeta => "Zeta",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alpha" => Ok(Direction::Alpha),
            "Beta" => Ok(Direction::Beta),
            "Gamma" => Ok(Direction::Gamma),
            "Delta" => Ok(Direction::Delta),
            "Epsilon" => Ok(Direction::Epsilon),
            "Zeta" => Ok(Direction::Zeta),
            other => anyhow::bail!(
                "Unknown direction '{other}'. Expected one of: Alpha, Beta, Gamma, Delta, Epsilon, Zeta"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_sequential() {
        let codes: Vec<&str> = Direction::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_band_group_for_digit() {
        assert_eq!(Direction::band_group_for_digit('1'), Some("ALPHA"));
        assert_eq!(Direction::band_group_for_digit('3'), Some("GAMMA"));
        assert_eq!(Direction::band_group_for_digit('6'), Some("ZETA"));
        assert_eq!(Direction::band_group_for_digit('0'), None);
        assert_eq!(Direction::band_group_for_digit('7'), None);
        assert_eq!(Direction::band_group_for_digit('x'), None);
    }

    #[test]
    fn test_from_str_round_trip() {
        for dir in Direction::ALL {
            let parsed: Direction = dir.to_string().parse().unwrap();
            assert_eq!(parsed, dir);
        }
        assert!("North".parse::<Direction>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Direction::Epsilon).unwrap();
        assert_eq!(json, "\"Epsilon\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Epsilon);
    }
}
