//! Trait definitions for the placer module.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// The filesystem primitives the executor needs.
///
/// Substitutable so tests can prove that a dry run never mutates anything.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Returns the name of this implementation.
    fn name(&self) -> &str;

    /// Creates `path` and any missing parents.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Renames `from` to `to`.
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Copies the content of `from` into a newly created `to`, returning the
    /// number of bytes written.
    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Creates a symbolic link at `link` pointing to `original`.
    async fn symlink(&self, original: &Path, link: &Path) -> io::Result<()>;
}
