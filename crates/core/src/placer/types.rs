//! Types for the placer module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// How a file is relocated to its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    /// Rename in place. Fails across filesystems.
    #[default]
    Move,
    /// Stream the bytes into a new file, leaving the source alone.
    Copy,
    /// Link the target to the source path as given.
    Symlink,
}

impl OperationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMode::Move => "move",
            OperationMode::Copy => "copy",
            OperationMode::Symlink => "symlink",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned for an operation name other than move, copy or symlink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation: {0} (expected move, copy or symlink)")]
pub struct UnknownOperationMode(pub String);

impl FromStr for OperationMode {
    type Err = UnknownOperationMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "move" => Ok(OperationMode::Move),
            "copy" => Ok(OperationMode::Copy),
            "symlink" => Ok(OperationMode::Symlink),
            _ => Err(UnknownOperationMode(s.to_string())),
        }
    }
}

/// One relocation: what happens to which file, and where it ends up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedOperation {
    pub mode: OperationMode,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl fmt::Display for PlannedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Would {}: {} -> {}",
            self.mode,
            self.source.display(),
            self.target.display()
        )
    }
}

/// Result of applying an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Dry run: nothing was touched.
    DryRun(PlannedOperation),
    /// The operation was carried out.
    Completed {
        operation: PlannedOperation,
        /// Bytes written, for copies.
        bytes_copied: Option<u64>,
    },
}

impl ApplyOutcome {
    pub fn operation(&self) -> &PlannedOperation {
        match self {
            ApplyOutcome::DryRun(operation) => operation,
            ApplyOutcome::Completed { operation, .. } => operation,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, ApplyOutcome::DryRun(_))
    }
}
