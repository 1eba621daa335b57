//! Applies move/copy/symlink operations for classified files.

use std::path::Path;
use tracing::debug;

use super::error::OperationError;
use super::fs::TokioFileSystem;
use super::traits::FileSystem;
use super::types::{ApplyOutcome, OperationMode, PlannedOperation};
use crate::classifier::MediaDescriptor;

/// Relocates files to their computed target paths.
#[derive(Debug, Clone)]
pub struct OperationExecutor<F: FileSystem = TokioFileSystem> {
    fs: F,
}

impl OperationExecutor<TokioFileSystem> {
    /// Creates an executor on the real filesystem.
    pub fn with_defaults() -> Self {
        Self::new(TokioFileSystem::with_defaults())
    }
}

impl<F: FileSystem> OperationExecutor<F> {
    /// Creates an executor on top of `fs`.
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Relocates `descriptor`'s source to its target path.
    ///
    /// With `dry_run` set, no filesystem call is made at all; the planned
    /// operation is logged and returned.
    pub async fn apply(
        &self,
        descriptor: &MediaDescriptor,
        mode: OperationMode,
        dry_run: bool,
    ) -> Result<ApplyOutcome, OperationError> {
        let target = descriptor
            .target_path
            .clone()
            .ok_or_else(|| OperationError::MissingTarget {
                path: descriptor.source_path.clone(),
            })?;

        let operation = PlannedOperation {
            mode,
            source: descriptor.source_path.clone(),
            target,
        };

        if dry_run {
            debug!("{}", operation);
            return Ok(ApplyOutcome::DryRun(operation));
        }

        self.ensure_parent_dir(&operation.target).await?;

        let bytes_copied = match mode {
            OperationMode::Move => {
                debug!("Moving file ({})", self.fs.name());
                self.fs
                    .rename(&operation.source, &operation.target)
                    .await
                    .map_err(|e| {
                        OperationError::move_failed(
                            operation.source.clone(),
                            operation.target.clone(),
                            e,
                        )
                    })?;
                None
            }
            OperationMode::Copy => {
                debug!("Copying file ({})", self.fs.name());
                let bytes = self
                    .fs
                    .copy(&operation.source, &operation.target)
                    .await
                    .map_err(|e| {
                        OperationError::copy_failed(
                            operation.source.clone(),
                            operation.target.clone(),
                            e,
                        )
                    })?;
                Some(bytes)
            }
            OperationMode::Symlink => {
                debug!("Creating symlink ({})", self.fs.name());
                self.fs
                    .symlink(&operation.source, &operation.target)
                    .await
                    .map_err(|e| {
                        OperationError::symlink_failed(
                            operation.source.clone(),
                            operation.target.clone(),
                            e,
                        )
                    })?;
                None
            }
        };

        Ok(ApplyOutcome::Completed {
            operation,
            bytes_copied,
        })
    }

    /// Creates the directory that will hold `target`.
    async fn ensure_parent_dir(&self, target: &Path) -> Result<(), OperationError> {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent).await.map_err(|e| {
                OperationError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    source: e,
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_path;
    use crate::layout::assign_target_path;
    use crate::testing::{FsCall, RecordingFileSystem};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tokio::fs;

    async fn targeted(source_dir: &Path, name: &str, dest: &Path) -> MediaDescriptor {
        let source = source_dir.join(name);
        fs::write(&source, format!("content of {}", name))
            .await
            .unwrap();
        let mut descriptor = classify_path(&source).unwrap();
        assign_target_path(&mut descriptor, dest);
        descriptor
    }

    #[tokio::test]
    async fn test_move_creates_directories_and_renames() {
        let source_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let descriptor = targeted(source_dir.path(), "Inception.2010.1080p.mkv", dest_dir.path()).await;

        let outcome = OperationExecutor::with_defaults()
            .apply(&descriptor, OperationMode::Move, false)
            .await
            .unwrap();

        let expected = dest_dir.path().join("Movies/Inception (2010) [1080p].mkv");
        assert_eq!(outcome.operation().target, expected);
        assert!(!outcome.is_dry_run());
        assert!(expected.exists());
        assert!(!descriptor.source_path.exists());
    }

    #[tokio::test]
    async fn test_copy_keeps_source() {
        let source_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let descriptor = targeted(source_dir.path(), "show.s1e1.mkv", dest_dir.path()).await;

        let outcome = OperationExecutor::with_defaults()
            .apply(&descriptor, OperationMode::Copy, false)
            .await
            .unwrap();

        let expected = dest_dir.path().join("TV Shows/Show/Season 1/Show S01E01.mkv");
        assert!(descriptor.source_path.exists());
        assert_eq!(
            fs::read_to_string(&expected).await.unwrap(),
            "content of show.s1e1.mkv"
        );
        assert!(matches!(
            outcome,
            ApplyOutcome::Completed {
                bytes_copied: Some(24),
                ..
            }
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_references_source_as_given() {
        let source_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let descriptor = targeted(source_dir.path(), "Heat.1995.mkv", dest_dir.path()).await;

        OperationExecutor::with_defaults()
            .apply(&descriptor, OperationMode::Symlink, false)
            .await
            .unwrap();

        let link = dest_dir.path().join("Movies/Heat (1995).mkv");
        assert_eq!(fs::read_link(&link).await.unwrap(), descriptor.source_path);
    }

    #[tokio::test]
    async fn test_dry_run_makes_no_filesystem_calls() {
        for mode in [
            OperationMode::Move,
            OperationMode::Copy,
            OperationMode::Symlink,
        ] {
            let recorder = RecordingFileSystem::new();
            let executor = OperationExecutor::new(recorder.clone());
            let mut descriptor = classify_path(Path::new("/in/Inception.2010.mkv")).unwrap();
            assign_target_path(&mut descriptor, Path::new("/out"));

            let outcome = executor.apply(&descriptor, mode, true).await.unwrap();

            assert!(outcome.is_dry_run());
            assert_eq!(outcome.operation().mode, mode);
            assert!(recorder.calls().await.is_empty(), "mode {} touched fs", mode);
        }
    }

    #[tokio::test]
    async fn test_live_run_creates_parent_before_acting() {
        let recorder = RecordingFileSystem::new();
        let executor = OperationExecutor::new(recorder.clone());
        let mut descriptor = classify_path(Path::new("/in/show.s1e1.mkv")).unwrap();
        assign_target_path(&mut descriptor, Path::new("/out"));

        executor
            .apply(&descriptor, OperationMode::Move, false)
            .await
            .unwrap();

        let target = PathBuf::from("/out/TV Shows/Show/Season 1/Show S01E01.mkv");
        assert_eq!(
            recorder.calls().await,
            vec![
                FsCall::CreateDirAll(PathBuf::from("/out/TV Shows/Show/Season 1")),
                FsCall::Rename(PathBuf::from("/in/show.s1e1.mkv"), target),
            ]
        );
    }

    #[tokio::test]
    async fn test_cross_device_move_is_reported() {
        let recorder = RecordingFileSystem::new();
        recorder
            .fail_rename_with(std::io::Error::from_raw_os_error(18))
            .await;
        let executor = OperationExecutor::new(recorder);
        let mut descriptor = classify_path(Path::new("/in/Heat.1995.mkv")).unwrap();
        assign_target_path(&mut descriptor, Path::new("/out"));

        let err = executor
            .apply(&descriptor, OperationMode::Move, false)
            .await
            .unwrap_err();

        assert!(matches!(err, OperationError::MoveFailed { .. }));
        assert!(err.is_cross_device());
    }

    #[tokio::test]
    async fn test_directory_creation_failure() {
        let recorder = RecordingFileSystem::new();
        recorder
            .fail_create_dir_with(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            ))
            .await;
        let executor = OperationExecutor::new(recorder.clone());
        let mut descriptor = classify_path(Path::new("/in/Heat.1995.mkv")).unwrap();
        assign_target_path(&mut descriptor, Path::new("/out"));

        let err = executor
            .apply(&descriptor, OperationMode::Copy, false)
            .await
            .unwrap_err();

        assert!(matches!(err, OperationError::DirectoryCreationFailed { .. }));
        // Nothing beyond the failed mkdir was attempted.
        assert_eq!(recorder.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_target_is_an_error() {
        let executor = OperationExecutor::new(RecordingFileSystem::new());
        let descriptor = classify_path(Path::new("/in/Heat.1995.mkv")).unwrap();

        let err = executor
            .apply(&descriptor, OperationMode::Move, true)
            .await
            .unwrap_err();
        assert!(matches!(err, OperationError::MissingTarget { .. }));
    }

    #[tokio::test]
    async fn test_copy_missing_source_fails() {
        let source_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let mut descriptor =
            classify_path(&source_dir.path().join("Gone.2001.mkv")).unwrap();
        assign_target_path(&mut descriptor, dest_dir.path());

        let err = OperationExecutor::with_defaults()
            .apply(&descriptor, OperationMode::Copy, false)
            .await
            .unwrap_err();

        assert!(matches!(err, OperationError::CopyFailed { .. }));
    }
}
