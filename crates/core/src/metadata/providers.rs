//! Provider combinations: the startup provider set and the no-op provider.

use async_trait::async_trait;

use super::tmdb::TmdbClient;
use super::tvdb::TvdbClient;
use super::types::{MovieMatch, SeriesMatch};
use super::{MetadataError, MetadataProvider};

/// Provider context built once at startup.
///
/// Delegates movie lookups to TMDB and series lookups to TVDB. Either side
/// may be missing, in which case that lookup reports `NotConfigured`.
pub struct ProviderSet {
    tmdb: Option<TmdbClient>,
    tvdb: Option<TvdbClient>,
}

impl ProviderSet {
    /// Create a provider set with optional backends.
    pub fn new(tmdb: Option<TmdbClient>, tvdb: Option<TvdbClient>) -> Self {
        Self { tmdb, tvdb }
    }

    /// Check if TMDB is available.
    pub fn has_tmdb(&self) -> bool {
        self.tmdb.is_some()
    }

    /// Check if TVDB is available.
    pub fn has_tvdb(&self) -> bool {
        self.tvdb.is_some()
    }
}

#[async_trait]
impl MetadataProvider for ProviderSet {
    fn name(&self) -> &str {
        "providers"
    }

    async fn lookup_movie(&self, title: &str) -> Result<Vec<MovieMatch>, MetadataError> {
        match &self.tmdb {
            Some(client) => client.search_movies(title).await,
            None => Err(MetadataError::NotConfigured(
                "TMDB client not configured".to_string(),
            )),
        }
    }

    async fn lookup_series(&self, title: &str) -> Result<Vec<SeriesMatch>, MetadataError> {
        match &self.tvdb {
            Some(client) => client.search_series(title).await,
            None => Err(MetadataError::NotConfigured(
                "TVDB client not configured".to_string(),
            )),
        }
    }
}

/// Provider that never finds anything and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProvider;

#[async_trait]
impl MetadataProvider for NullProvider {
    fn name(&self) -> &str {
        "null"
    }

    async fn lookup_movie(&self, _title: &str) -> Result<Vec<MovieMatch>, MetadataError> {
        Ok(Vec::new())
    }

    async fn lookup_series(&self, _title: &str) -> Result<Vec<SeriesMatch>, MetadataError> {
        Ok(Vec::new())
    }
}
