//! Types for classified media files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// What a file was classified as.
///
/// Season and episode only exist on the series variant, so a movie can never
/// carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaKind {
    /// A feature film identified by title and year.
    Movie,
    /// A TV episode. Numbers are kept as parsed ("1", "01").
    Series { season: String, episode: String },
}

/// Release quality tag found in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    Hd1080,
    #[serde(rename = "2160p")]
    Uhd2160,
    #[serde(rename = "BRRip")]
    BrRip,
    #[serde(rename = "BluRay")]
    BluRay,
    #[serde(rename = "WEBRip")]
    WebRip,
    #[serde(rename = "HDRip")]
    HdRip,
}

impl Quality {
    /// Every recognized tag.
    pub const ALL: [Quality; 7] = [
        Quality::Hd720,
        Quality::Hd1080,
        Quality::Uhd2160,
        Quality::BrRip,
        Quality::BluRay,
        Quality::WebRip,
        Quality::HdRip,
    ];

    /// Canonical spelling used in target filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Hd720 => "720p",
            Quality::Hd1080 => "1080p",
            Quality::Uhd2160 => "2160p",
            Quality::BrRip => "BRRip",
            Quality::BluRay => "BluRay",
            Quality::WebRip => "WEBRip",
            Quality::HdRip => "HDRip",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known quality tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown quality tag: {0}")]
pub struct UnknownQuality(pub String);

impl FromStr for Quality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quality::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownQuality(s.to_string()))
    }
}

/// Structured identity of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Movie or series episode.
    #[serde(flatten)]
    pub kind: MediaKind,
    /// Normalized title, never empty.
    pub title: String,
    /// Four-digit year, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Quality tag, if the filename had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    /// Original extension without the leading dot.
    pub extension: String,
    /// Where the file currently lives.
    pub source_path: PathBuf,
    /// Where the file should go, once computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_path: Option<PathBuf>,
}

impl MediaDescriptor {
    pub fn is_series(&self) -> bool {
        matches!(self.kind, MediaKind::Series { .. })
    }

    pub fn is_movie(&self) -> bool {
        matches!(self.kind, MediaKind::Movie)
    }

    /// Season number as parsed, for series.
    pub fn season(&self) -> Option<&str> {
        match &self.kind {
            MediaKind::Series { season, .. } => Some(season),
            MediaKind::Movie => None,
        }
    }

    /// Episode number as parsed, for series.
    pub fn episode(&self) -> Option<&str> {
        match &self.kind {
            MediaKind::Series { episode, .. } => Some(episode),
            MediaKind::Movie => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_from_str_is_case_insensitive() {
        assert_eq!("bluray".parse::<Quality>().unwrap(), Quality::BluRay);
        assert_eq!("1080P".parse::<Quality>().unwrap(), Quality::Hd1080);
        assert_eq!("webrip".parse::<Quality>().unwrap(), Quality::WebRip);
        assert!("480p".parse::<Quality>().is_err());
    }

    #[test]
    fn test_quality_display_uses_canonical_spelling() {
        let rendered: Vec<String> = Quality::ALL.iter().map(|q| q.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["720p", "1080p", "2160p", "BRRip", "BluRay", "WEBRip", "HDRip"]
        );
    }

    #[test]
    fn test_movie_has_no_season_or_episode() {
        let descriptor = MediaDescriptor {
            kind: MediaKind::Movie,
            title: "Inception".to_string(),
            year: Some("2010".to_string()),
            quality: None,
            extension: "mkv".to_string(),
            source_path: PathBuf::from("Inception.2010.mkv"),
            target_path: None,
        };

        assert!(descriptor.is_movie());
        assert!(descriptor.season().is_none());
        assert!(descriptor.episode().is_none());
    }

    #[test]
    fn test_descriptor_serializes_kind_inline() {
        let descriptor = MediaDescriptor {
            kind: MediaKind::Series {
                season: "1".to_string(),
                episode: "2".to_string(),
            },
            title: "Show".to_string(),
            year: None,
            quality: Some(Quality::Hd720),
            extension: "mkv".to_string(),
            source_path: PathBuf::from("show.s1e2.720p.mkv"),
            target_path: None,
        };

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["kind"], "series");
        assert_eq!(json["season"], "1");
        assert_eq!(json["quality"], "720p");
        assert!(json.get("year").is_none());
    }
}
