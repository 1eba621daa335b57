//! TVDB series search.
//!
//! TVDB hands out a bearer token in exchange for the API key. The exchange
//! happens once in [`TvdbClient::login`]; the token is then attached to every
//! search for the lifetime of the client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{MovieMatch, SeriesMatch};
use super::{AuthError, MetadataError, MetadataProvider};

/// Default TVDB API root.
pub const DEFAULT_TVDB_URL: &str = "https://api.thetvdb.com";

/// TVDB client configuration.
#[derive(Debug, Clone)]
pub struct TvdbConfig {
    /// TVDB API key (required).
    pub api_key: String,
    /// Base URL (default: https://api.thetvdb.com).
    pub base_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Authenticated TVDB API client.
pub struct TvdbClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TvdbClient {
    /// Exchange the API key for a bearer token and build a client around it.
    pub async fn login(config: TvdbConfig) -> Result<Self, AuthError> {
        if config.api_key.is_empty() {
            return Err(AuthError::MissingApiKey);
        }

        let client = Client::builder().timeout(config.timeout).build()?;
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_TVDB_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        debug!("Requesting TVDB token");

        let response = client
            .post(format!("{}/login", base_url))
            .json(&LoginRequest {
                apikey: &config.api_key,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        let token = login
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidResponse("TVDB returned no token".to_string()))?;

        debug!("TVDB token obtained successfully");

        Ok(Self::with_token(client, base_url, token))
    }

    /// Build a client around an already-issued token.
    pub fn with_token(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    /// Search for series by name.
    pub async fn search_series(&self, name: &str) -> Result<Vec<SeriesMatch>, MetadataError> {
        let url = format!("{}/search/series", self.base_url);

        debug!("TVDB series search: name='{}'", name);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("name", name)])
            .send()
            .await?;

        let status = response.status();
        debug!("TVDB response status: {}", status);
        // TVDB answers an empty search with 404.
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(MetadataError::NotConfigured(
                "TVDB token rejected".to_string(),
            ));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MetadataError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_result: TvdbSearchResponse = response.json().await.map_err(|e| {
            MetadataError::ParseError(format!("Failed to parse series search response: {}", e))
        })?;

        debug!("Found {} results on TVDB", search_result.data.len());

        Ok(search_result.data.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MetadataProvider for TvdbClient {
    fn name(&self) -> &str {
        "tvdb"
    }

    async fn lookup_movie(&self, _title: &str) -> Result<Vec<MovieMatch>, MetadataError> {
        Err(MetadataError::NotSupported {
            provider: "tvdb",
            lookup: "movie",
        })
    }

    async fn lookup_series(&self, title: &str) -> Result<Vec<SeriesMatch>, MetadataError> {
        self.search_series(title).await
    }
}

// ============================================================================
// TVDB API Types (private)
// ============================================================================

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    apikey: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TvdbSearchResponse {
    #[serde(default)]
    data: Vec<TvdbSeriesResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TvdbSeriesResult {
    id: u64,
    series_name: Option<String>,
    first_aired: Option<String>,
    status: Option<String>,
    network: Option<String>,
}

impl From<TvdbSeriesResult> for SeriesMatch {
    fn from(r: TvdbSeriesResult) -> Self {
        Self {
            id: r.id,
            name: r.series_name.unwrap_or_default(),
            first_aired: r.first_aired.filter(|d| !d.is_empty()),
            status: r.status.filter(|s| !s.is_empty()),
            network: r.network.filter(|n| !n.is_empty()),
        }
    }
}
