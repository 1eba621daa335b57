//! Source tree traversal.
//!
//! Walks the source directory recursively and keeps regular files whose
//! extension marks them as video.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extensions treated as video, compared case-insensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "m4v", "flv"];

/// Errors that make the source tree unusable as a whole.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Source directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read source directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns true if `path` has one of the [`VIDEO_EXTENSIONS`].
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Collects every video file under `source`, depth first.
///
/// Entries within a directory are visited in file-name order, so the result
/// is stable between runs. Entries that cannot be read are logged and
/// skipped; only a missing or unreadable root is an error.
pub fn collect_video_files(source: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = std::fs::metadata(source).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScanError::NotFound(source.to_path_buf()),
        _ => ScanError::Unreadable {
            path: source.to_path_buf(),
            source: e,
        },
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(source.to_path_buf()));
    }

    info!("Scanning {}", source.display());
    let mut files = Vec::new();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // The root itself failing means there is nothing to walk.
                if e.depth() == 0 {
                    let path = e.path().unwrap_or(source).to_path_buf();
                    return Err(ScanError::Unreadable {
                        path,
                        source: e.into(),
                    });
                }
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if is_video_file(entry.path()) {
            files.push(entry.into_path());
        } else {
            debug!("Ignoring non-video file {}", entry.path().display());
        }
    }

    info!("Found {} video files", files.len());
    Ok(files)
}
