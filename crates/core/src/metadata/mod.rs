//! Metadata enrichment from external providers.
//!
//! Movie lookups go to TMDB, series lookups to TVDB. Both sit behind the
//! [`MetadataProvider`] trait so the resolver, and tests, never care which
//! backend answers.

mod providers;
mod resolver;
mod tmdb;
mod tvdb;
mod types;

pub use providers::{NullProvider, ProviderSet};
pub use resolver::MetadataResolver;
pub use tmdb::{TmdbClient, TmdbConfig, DEFAULT_TMDB_URL};
pub use tvdb::{TvdbClient, TvdbConfig, DEFAULT_TVDB_URL};
pub use types::{year_from_date, MovieMatch, SeriesMatch};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying a metadata provider.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Provider not configured (missing API key, rejected credentials).
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Provider does not offer this kind of lookup.
    #[error("{provider} does not support {lookup} lookups")]
    NotSupported {
        provider: &'static str,
        lookup: &'static str,
    },
}

/// Errors from the one-time credential exchange at startup.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No API key was supplied.
    #[error("API key is required")]
    MissingApiKey,

    /// Login request could not be sent or read.
    #[error("Login request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Provider refused the credentials.
    #[error("Login rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// Login response did not contain a usable token.
    #[error("Invalid login response: {0}")]
    InvalidResponse(String),
}

/// Capability set offered by a metadata backend.
///
/// Results are ordered as the provider returned them.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Returns the name of this provider.
    fn name(&self) -> &str;

    /// Search for movies by title.
    async fn lookup_movie(&self, title: &str) -> Result<Vec<MovieMatch>, MetadataError>;

    /// Search for TV series by title.
    async fn lookup_series(&self, title: &str) -> Result<Vec<SeriesMatch>, MetadataError>;
}
