//! Testing utilities and mock implementations.
//!
//! This module provides doubles for the two external seams of the pipeline,
//! the metadata provider and the filesystem, so whole runs can be tested
//! without network access or disk writes.
//!
//! # Example
//!
//! ```rust,ignore
//! use mediasort_core::testing::{MockMetadataProvider, RecordingFileSystem};
//!
//! let provider = MockMetadataProvider::new();
//! let filesystem = RecordingFileSystem::new();
//!
//! // Configure mock responses
//! provider.set_movies(vec![fixtures::movie_match("Inception", "2010-07-15")]).await;
//!
//! // Build a pipeline around them...
//! ```

mod mock_metadata_provider;
mod recording_fs;

pub use mock_metadata_provider::{MockMetadataProvider, RecordedLookup};
pub use recording_fs::{FsCall, RecordingFileSystem};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::metadata::{MovieMatch, SeriesMatch};

    /// Create a movie match with the given title and release date.
    pub fn movie_match(title: &str, release_date: &str) -> MovieMatch {
        MovieMatch {
            id: 1,
            title: title.to_string(),
            release_date: Some(release_date.to_string()),
        }
    }

    /// Create a series match with the given name and first air date.
    pub fn series_match(name: &str, first_aired: &str) -> SeriesMatch {
        SeriesMatch {
            id: 1,
            name: name.to_string(),
            first_aired: Some(first_aired.to_string()),
            status: Some("Continuing".to_string()),
            network: None,
        }
    }
}
