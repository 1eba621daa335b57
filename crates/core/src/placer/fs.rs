//! Tokio-backed filesystem implementation.

use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufReader, BufWriter};

use super::config::PlacerConfig;
use super::traits::FileSystem;

/// Real filesystem access through `tokio::fs`.
#[derive(Debug, Clone)]
pub struct TokioFileSystem {
    config: PlacerConfig,
}

impl TokioFileSystem {
    /// Creates a filesystem with the given configuration.
    pub fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    /// Creates a filesystem with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlacerConfig::default())
    }
}

impl Default for TokioFileSystem {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl FileSystem for TokioFileSystem {
    fn name(&self) -> &str {
        "tokio"
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let source_file = File::open(from).await?;
        let dest_file = File::create(to).await?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, source_file);
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, dest_file);

        let total_bytes = tokio::io::copy_buf(&mut reader, &mut writer).await?;
        writer.flush().await?;

        Ok(total_bytes)
    }

    async fn symlink(&self, original: &Path, link: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            fs::symlink(original, link).await
        }
        #[cfg(windows)]
        {
            fs::symlink_file(original, link).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_copy_preserves_content() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source.bin");
        let dest = temp.path().join("dest.bin");
        let content: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&source, &content).await.unwrap();

        let filesystem = TokioFileSystem::new(PlacerConfig::default().with_buffer_size(512));
        let copied = filesystem.copy(&source, &dest).await.unwrap();

        assert_eq!(copied, content.len() as u64);
        assert_eq!(fs::read(&dest).await.unwrap(), content);
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_copy_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let filesystem = TokioFileSystem::with_defaults();

        let err = filesystem
            .copy(&temp.path().join("missing"), &temp.path().join("dest"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!temp.path().join("dest").exists());
    }

    #[tokio::test]
    async fn test_rename_moves_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        let dest = temp.path().join("b.txt");
        fs::write(&source, "hello").await.unwrap();

        TokioFileSystem::with_defaults()
            .rename(&source, &dest)
            .await
            .unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&dest).await.unwrap(), "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_points_at_original() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        let link = temp.path().join("link.txt");
        fs::write(&source, "hello").await.unwrap();

        TokioFileSystem::with_defaults()
            .symlink(&source, &link)
            .await
            .unwrap();

        assert_eq!(fs::read_link(&link).await.unwrap(), source);
    }
}
