//! Filename classification.
//!
//! Turns a raw filename such as `Breaking.Bad.S01E02.720p.mkv` into a
//! [`MediaDescriptor`]. The series pattern is tried first, so a name that
//! satisfies both patterns is always a series.

mod patterns;
mod types;

pub use patterns::normalize_title;
pub use types::{MediaDescriptor, MediaKind, Quality, UnknownQuality};

use std::path::Path;
use thiserror::Error;
use tracing::debug;

use patterns::{group, MOVIE_PATTERN, SERIES_PATTERN};

/// Errors that can occur when classifying a filename.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Neither the series nor the movie pattern matched.
    #[error("Unable to parse filename: {filename}")]
    Unrecognized { filename: String },
}

impl ClassificationError {
    /// The raw filename that failed to classify.
    pub fn filename(&self) -> &str {
        match self {
            Self::Unrecognized { filename } => filename,
        }
    }
}

/// Classifies a bare filename (extension included).
pub fn classify(filename: &str) -> Result<MediaDescriptor, ClassificationError> {
    classify_path(Path::new(filename))
}

/// Classifies the file at `path`, recording it as the descriptor's source.
pub fn classify_path(path: &Path) -> Result<MediaDescriptor, ClassificationError> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(caps) = SERIES_PATTERN.captures(&stem) {
        let title = normalize_title(group(&caps, 1).unwrap_or_default());
        if !title.is_empty() {
            debug!("Matched series pattern: {}", filename);
            return Ok(MediaDescriptor {
                kind: MediaKind::Series {
                    season: group(&caps, 2).unwrap_or_default().to_string(),
                    episode: group(&caps, 3).unwrap_or_default().to_string(),
                },
                title,
                year: None,
                quality: group(&caps, 4).and_then(|q| q.parse().ok()),
                extension,
                source_path: path.to_path_buf(),
                target_path: None,
            });
        }
    }

    if let Some(caps) = MOVIE_PATTERN.captures(&stem) {
        let title = normalize_title(group(&caps, 1).unwrap_or_default());
        if !title.is_empty() {
            debug!("Matched movie pattern: {}", filename);
            return Ok(MediaDescriptor {
                kind: MediaKind::Movie,
                title,
                year: group(&caps, 2).map(str::to_string),
                quality: group(&caps, 3).and_then(|q| q.parse().ok()),
                extension,
                source_path: path.to_path_buf(),
                target_path: None,
            });
        }
    }

    Err(ClassificationError::Unrecognized { filename })
}
