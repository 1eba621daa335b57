//! Per-file processing pipeline.
//!
//! Each file goes through four stages in order:
//!
//! ```text
//! classify -> enrich (best effort) -> compute target -> apply
//! ```
//!
//! Files are processed one at a time. A failure in one file is recorded in
//! its [`FileReport`] and never stops the batch.

mod types;

pub use types::{FileReport, FileState, PipelineOptions, RunSummary};


use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::classifier::classify_path;
use crate::layout::assign_target_path;
use crate::metadata::MetadataResolver;
use crate::placer::{ApplyOutcome, FileSystem, OperationExecutor, TokioFileSystem};

/// Called with each file's report as soon as that file is finished.
pub type ReportCallback = Arc<dyn Fn(&FileReport) + Send + Sync>;

/// Drives files from their source location into the library layout.
#[derive(Clone)]
pub struct Pipeline<F: FileSystem = TokioFileSystem> {
    resolver: MetadataResolver,
    executor: OperationExecutor<F>,
    options: PipelineOptions,
    on_report: Option<ReportCallback>,
}

impl<F: FileSystem> Pipeline<F> {
    /// Creates a new pipeline.
    pub fn new(
        resolver: MetadataResolver,
        executor: OperationExecutor<F>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            resolver,
            executor,
            options,
            on_report: None,
        }
    }

    /// Sets a callback that sees every report before the next file starts.
    pub fn with_report_callback(mut self, callback: ReportCallback) -> Self {
        self.on_report = Some(callback);
        self
    }

    /// Processes a single file and reports its terminal state.
    pub async fn process_file(&self, path: &Path) -> FileReport {
        let mut descriptor = match classify_path(path) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return FileReport {
                    source: path.to_path_buf(),
                    target: None,
                    enriched: false,
                    state: FileState::Skipped(e),
                };
            }
        };

        let enriched = self.resolver.enrich(&mut descriptor).await;
        let target = assign_target_path(&mut descriptor, &self.options.destination);
        debug!("Target for {}: {}", path.display(), target.display());

        let state = match self
            .executor
            .apply(&descriptor, self.options.mode, self.options.dry_run)
            .await
        {
            Ok(outcome) => {
                if let ApplyOutcome::Completed { operation, .. } = &outcome {
                    info!(
                        "{}: {} -> {}",
                        operation.mode,
                        operation.source.display(),
                        operation.target.display()
                    );
                }
                FileState::Applied(outcome)
            }
            Err(e) => {
                if e.is_cross_device() {
                    error!(
                        "Error processing {}: {} (source and destination are on different filesystems, try --op copy)",
                        path.display(),
                        e
                    );
                } else {
                    error!("Error processing {}: {}", path.display(), e);
                }
                FileState::Failed(e)
            }
        };

        FileReport {
            source: path.to_path_buf(),
            target: Some(target),
            enriched,
            state,
        }
    }

    /// Processes every path in order, one after the other.
    pub async fn run<I, P>(&self, paths: I) -> RunSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = RunSummary::default();
        for path in paths {
            let report = self.process_file(path.as_ref()).await;
            debug!("{} -> {}", report.source.display(), report.state.label());
            if let Some(callback) = &self.on_report {
                callback(&report);
            }
            summary.record(&report);
        }
        info!("Run finished: {}", summary);
        summary
    }
}

impl<F: FileSystem + std::fmt::Debug> std::fmt::Debug for Pipeline<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("resolver", &self.resolver)
            .field("executor", &self.executor)
            .field("options", &self.options)
            .field("on_report", &self.on_report.is_some())
            .finish()
    }
}
