//! TMDB (The Movie Database) movie search.
//!
//! TMDB requires an API key for access, passed as a query parameter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::types::{MovieMatch, SeriesMatch};
use super::{MetadataError, MetadataProvider};

/// Default TMDB API root.
pub const DEFAULT_TMDB_URL: &str = "https://api.themoviedb.org/3";

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    pub base_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, MetadataError> {
        if config.api_key.is_empty() {
            return Err(MetadataError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_TMDB_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Search for movies by title.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<MovieMatch>, MetadataError> {
        let url = format!("{}/search/movie", self.base_url);

        debug!("TMDB movie search: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;

        let status = response.status();
        debug!("TMDB response status: {}", status);
        if status == 401 {
            return Err(MetadataError::NotConfigured(
                "Invalid TMDB API key".to_string(),
            ));
        }
        if status == 429 {
            return Err(MetadataError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_result: TmdbSearchResponse = response.json().await.map_err(|e| {
            MetadataError::ParseError(format!("Failed to parse movie search response: {}", e))
        })?;

        debug!("Found {} results on TMDB", search_result.results.len());

        Ok(search_result.results.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn lookup_movie(&self, title: &str) -> Result<Vec<MovieMatch>, MetadataError> {
        self.search_movies(title).await
    }

    async fn lookup_series(&self, _title: &str) -> Result<Vec<SeriesMatch>, MetadataError> {
        Err(MetadataError::NotSupported {
            provider: "tmdb",
            lookup: "series",
        })
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbMovieResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieResult {
    id: u64,
    title: Option<String>,
    release_date: Option<String>,
}

impl From<TmdbMovieResult> for MovieMatch {
    fn from(r: TmdbMovieResult) -> Self {
        Self {
            id: r.id,
            title: r.title.unwrap_or_default(),
            release_date: r.release_date.filter(|d| !d.is_empty()),
        }
    }
}
