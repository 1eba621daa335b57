//! Mock metadata provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::metadata::{MetadataError, MetadataProvider, MovieMatch, SeriesMatch};

/// A recorded lookup for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedLookup {
    Movie { title: String },
    Series { title: String },
}

/// Mock implementation of the MetadataProvider trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable movie/series results, in the order given
/// - Track lookups for assertions
/// - Simulate failures
///
/// Clones share state, so a test can keep one handle while the resolver owns
/// another.
///
/// # Example
///
/// ```rust,ignore
/// use mediasort_core::testing::{MockMetadataProvider, fixtures};
///
/// let provider = MockMetadataProvider::new();
/// provider.set_movies(vec![fixtures::movie_match("Inception", "2010-07-15")]).await;
///
/// let resolver = MetadataResolver::new(Arc::new(provider.clone()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockMetadataProvider {
    /// Movie results returned for every movie lookup.
    movies: Arc<RwLock<Vec<MovieMatch>>>,
    /// Series results returned for every series lookup.
    series: Arc<RwLock<Vec<SeriesMatch>>>,
    /// Recorded lookups.
    lookups: Arc<RwLock<Vec<RecordedLookup>>>,
    /// If set, the next lookup will fail with this error.
    next_error: Arc<RwLock<Option<MetadataError>>>,
}

impl MockMetadataProvider {
    /// Create a new mock with no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movie results.
    pub async fn set_movies(&self, movies: Vec<MovieMatch>) {
        *self.movies.write().await = movies;
    }

    /// Set the series results.
    pub async fn set_series(&self, series: Vec<SeriesMatch>) {
        *self.series.write().await = series;
    }

    /// Get all recorded lookups.
    pub async fn recorded_lookups(&self) -> Vec<RecordedLookup> {
        self.lookups.read().await.clone()
    }

    /// Titles passed to movie lookups, in order.
    pub async fn movie_queries(&self) -> Vec<String> {
        self.lookups
            .read()
            .await
            .iter()
            .filter_map(|l| match l {
                RecordedLookup::Movie { title } => Some(title.clone()),
                RecordedLookup::Series { .. } => None,
            })
            .collect()
    }

    /// Titles passed to series lookups, in order.
    pub async fn series_queries(&self) -> Vec<String> {
        self.lookups
            .read()
            .await
            .iter()
            .filter_map(|l| match l {
                RecordedLookup::Series { title } => Some(title.clone()),
                RecordedLookup::Movie { .. } => None,
            })
            .collect()
    }

    /// Get the number of lookups performed.
    pub async fn lookup_count(&self) -> usize {
        self.lookups.read().await.len()
    }

    /// Configure the next lookup to fail with the given error.
    pub async fn set_next_error(&self, error: MetadataError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<MetadataError> {
        self.next_error.write().await.take()
    }

    /// Record a lookup.
    async fn record(&self, lookup: RecordedLookup) {
        self.lookups.write().await.push(lookup);
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn lookup_movie(&self, title: &str) -> Result<Vec<MovieMatch>, MetadataError> {
        self.record(RecordedLookup::Movie {
            title: title.to_string(),
        })
        .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(self.movies.read().await.clone())
    }

    async fn lookup_series(&self, title: &str) -> Result<Vec<SeriesMatch>, MetadataError> {
        self.record(RecordedLookup::Series {
            title: title.to_string(),
        })
        .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(self.series.read().await.clone())
    }
}
