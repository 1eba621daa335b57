//! In-memory filesystem double that records every call.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::placer::FileSystem;

/// A filesystem call, as seen by [`RecordingFileSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    CreateDirAll(PathBuf),
    Rename(PathBuf, PathBuf),
    Copy(PathBuf, PathBuf),
    Symlink(PathBuf, PathBuf),
}

/// Filesystem that touches nothing and remembers what it was asked to do.
///
/// Every call succeeds unless a failure was injected for that kind of call.
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingFileSystem {
    calls: Arc<RwLock<Vec<FsCall>>>,
    create_dir_error: Arc<RwLock<Option<io::Error>>>,
    rename_error: Arc<RwLock<Option<io::Error>>>,
    copy_error: Arc<RwLock<Option<io::Error>>>,
    symlink_error: Arc<RwLock<Option<io::Error>>>,
}

impl RecordingFileSystem {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls, in order.
    pub async fn calls(&self) -> Vec<FsCall> {
        self.calls.read().await.clone()
    }

    /// Make the next `create_dir_all` fail.
    pub async fn fail_create_dir_with(&self, error: io::Error) {
        *self.create_dir_error.write().await = Some(error);
    }

    /// Make the next `rename` fail.
    pub async fn fail_rename_with(&self, error: io::Error) {
        *self.rename_error.write().await = Some(error);
    }

    /// Make the next `copy` fail.
    pub async fn fail_copy_with(&self, error: io::Error) {
        *self.copy_error.write().await = Some(error);
    }

    /// Make the next `symlink` fail.
    pub async fn fail_symlink_with(&self, error: io::Error) {
        *self.symlink_error.write().await = Some(error);
    }

    async fn record(&self, call: FsCall, slot: &RwLock<Option<io::Error>>) -> io::Result<()> {
        self.calls.write().await.push(call);
        match slot.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FileSystem for RecordingFileSystem {
    fn name(&self) -> &str {
        "recording"
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::CreateDirAll(path.to_path_buf()), &self.create_dir_error)
            .await
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.record(
            FsCall::Rename(from.to_path_buf(), to.to_path_buf()),
            &self.rename_error,
        )
        .await
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        self.record(
            FsCall::Copy(from.to_path_buf(), to.to_path_buf()),
            &self.copy_error,
        )
        .await?;
        Ok(0)
    }

    async fn symlink(&self, original: &Path, link: &Path) -> io::Result<()> {
        self.record(
            FsCall::Symlink(original.to_path_buf(), link.to_path_buf()),
            &self.symlink_error,
        )
        .await
    }
}
