//! Match records returned by metadata providers.

use serde::{Deserialize, Serialize};

/// A movie search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMatch {
    /// Provider-specific ID.
    pub id: u64,
    /// Movie title as the provider spells it.
    pub title: String,
    /// Release date (YYYY-MM-DD or partial).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl MovieMatch {
    /// Year taken from the release date, if it has one.
    pub fn year(&self) -> Option<String> {
        year_from_date(self.release_date.as_deref())
    }
}

/// A series search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMatch {
    /// Provider-specific ID.
    pub id: u64,
    /// Series name as the provider spells it.
    pub name: String,
    /// First air date (YYYY-MM-DD or partial).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_aired: Option<String>,
    /// Airing status ("Continuing", "Ended").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Original network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl SeriesMatch {
    /// Year taken from the first air date, if it has one.
    pub fn year(&self) -> Option<String> {
        year_from_date(self.first_aired.as_deref())
    }
}

/// Leading four characters of a provider date, when they form a year in
/// 1900-2099.
///
/// Short, empty, non-numeric or out-of-range dates yield `None`.
pub fn year_from_date(date: Option<&str>) -> Option<String> {
    let year = date?.get(..4)?;
    let in_range = (year.starts_with("19") || year.starts_with("20"))
        && year.chars().all(|c| c.is_ascii_digit());
    if in_range {
        Some(year.to_string())
    } else {
        None
    }
}
