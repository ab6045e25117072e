use serde::{Deserialize, Serialize};
use std::fmt;

/// Year used in place of a missing release year when sorting and filtering.
pub const UNKNOWN_YEAR: u16 = 9999;
/// Month used in place of a missing release month when sorting.
pub const UNKNOWN_MONTH: u8 = 13;

/// An album (or single, compilation, live release) in an artist's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub id: u64,
    pub title: String,
    /// Name of the album's primary artist.
    pub artist: String,
    #[serde(default)]
    pub release: ReleaseDate,
}

/// Partial release date as reported by the catalog. Either component may be absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
}

impl ReleaseDate {
    pub fn new(year: Option<u16>, month: Option<u8>) -> Self {
        Self { year, month }
    }

    /// Sort key with missing components replaced by the sentinels, so
    /// undated releases sort after everything else.
    pub fn sort_key(&self) -> (u16, u8) {
        (
            self.year.unwrap_or(UNKNOWN_YEAR),
            self.month.unwrap_or(UNKNOWN_MONTH),
        )
    }

    /// Year compared against min/max year filters.
    ///
    /// An undated release counts as year 9999: it passes any `min_year`
    /// and fails any `max_year` below 9999.
    pub fn filter_year(&self) -> u16 {
        self.year.unwrap_or(UNKNOWN_YEAR)
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.year, self.month) {
            (Some(y), Some(m)) => write!(f, "{y}-{m:02}"),
            (Some(y), None) => write!(f, "{y}"),
            (None, _) => write!(f, "unknown"),
        }
    }
}

impl Album {
    /// Case-insensitive check of the title against a list of substrings.
    /// Empty needles never match.
    pub fn title_contains_any(&self, needles: &[String]) -> bool {
        let title = self.title.to_lowercase();
        needles
            .iter()
            .filter(|n| !n.is_empty())
            .any(|n| title.contains(&n.to_lowercase()))
    }
}
