//! Types for the pipeline module.

use std::fmt;
use std::path::PathBuf;

use crate::classifier::ClassificationError;
use crate::placer::{ApplyOutcome, OperationError, OperationMode, PlannedOperation};

/// Settings shared by every file in a run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Root of the library layout.
    pub destination: PathBuf,
    /// How files are relocated.
    pub mode: OperationMode,
    /// Report the planned operation instead of performing it.
    pub dry_run: bool,
}

/// Where a single file ended up.
#[derive(Debug)]
pub enum FileState {
    /// The operation was performed, or planned in a dry run.
    Applied(ApplyOutcome),
    /// The filename could not be classified; nothing was touched.
    Skipped(ClassificationError),
    /// The operation was attempted and failed.
    Failed(OperationError),
}

impl FileState {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Applied(_) => "applied",
            Self::Skipped(_) => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

/// Result of processing one file.
#[derive(Debug)]
pub struct FileReport {
    /// Path the file was found at.
    pub source: PathBuf,
    /// Computed library path, if classification succeeded.
    pub target: Option<PathBuf>,
    /// Whether provider metadata replaced the parsed title or year.
    pub enriched: bool,
    /// Terminal state.
    pub state: FileState,
}

impl FileReport {
    pub fn is_applied(&self) -> bool {
        matches!(self.state, FileState::Applied(_))
    }

    /// The planned operation, when this report comes from a dry run.
    pub fn planned(&self) -> Option<&PlannedOperation> {
        match &self.state {
            FileState::Applied(ApplyOutcome::DryRun(operation)) => Some(operation),
            _ => None,
        }
    }
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Files whose title or year came from a provider.
    pub enriched: usize,
    /// Operations reported instead of performed.
    pub planned: usize,
}

impl RunSummary {
    /// Number of files seen.
    pub fn total(&self) -> usize {
        self.applied + self.skipped + self.failed
    }

    /// Folds one file's report into the totals.
    pub fn record(&mut self, report: &FileReport) {
        if report.enriched {
            self.enriched += 1;
        }
        if report.planned().is_some() {
            self.planned += 1;
        }
        match &report.state {
            FileState::Applied(_) => self.applied += 1,
            FileState::Skipped(_) => self.skipped += 1,
            FileState::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} applied, {} skipped, {} failed ({} enriched)",
            self.total(),
            self.applied,
            self.skipped,
            self.failed,
            self.enriched
        )
    }
}
