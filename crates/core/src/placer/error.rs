//! Error types for the placer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while relocating one file.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The descriptor never had a target path assigned.
    #[error("No target path computed for {path}")]
    MissingTarget { path: PathBuf },

    /// Failed to create destination directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move/rename file.
    #[error("Failed to move file from {source} to {destination}")]
    MoveFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to copy file.
    #[error("Failed to copy file from {source} to {destination}")]
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to create the symbolic link.
    #[error("Failed to symlink {destination} to {source}")]
    SymlinkFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl OperationError {
    /// Creates a move failed error.
    pub fn move_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::MoveFailed {
            source,
            destination,
            error,
        }
    }

    /// Creates a copy failed error.
    pub fn copy_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::CopyFailed {
            source,
            destination,
            error,
        }
    }

    /// Creates a symlink failed error.
    pub fn symlink_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::SymlinkFailed {
            source,
            destination,
            error,
        }
    }

    /// Whether a rename failed because source and target are on different
    /// filesystems. Copy mode works in that case.
    pub fn is_cross_device(&self) -> bool {
        match self {
            Self::MoveFailed { error, .. } => {
                // EXDEV is 18 on Linux and macOS
                error.kind() == std::io::ErrorKind::CrossesDevices || error.raw_os_error() == Some(18)
            }
            _ => false,
        }
    }
}
