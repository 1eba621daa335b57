use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::metadata::{TmdbConfig, TvdbConfig, DEFAULT_TMDB_URL, DEFAULT_TVDB_URL};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// TMDB API key. Movie enrichment is disabled without it.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,
    /// TVDB API key. Series enrichment is disabled without it.
    #[serde(default)]
    pub tvdb_api_key: Option<String>,
    #[serde(default = "default_tmdb_base_url")]
    pub tmdb_base_url: String,
    #[serde(default = "default_tvdb_base_url")]
    pub tvdb_base_url: String,
    /// Per-request timeout for provider calls, in seconds (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            tvdb_api_key: None,
            tmdb_base_url: default_tmdb_base_url(),
            tvdb_base_url: default_tvdb_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_tmdb_base_url() -> String {
    DEFAULT_TMDB_URL.to_string()
}

fn default_tvdb_base_url() -> String {
    DEFAULT_TVDB_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// A key counts as configured only when it has non-blank content.
fn configured_key(key: &Option<String>) -> Option<&str> {
    key.as_deref().map(str::trim).filter(|k| !k.is_empty())
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// TMDB client settings, or `None` when no key is configured.
    pub fn tmdb(&self) -> Option<TmdbConfig> {
        configured_key(&self.tmdb_api_key).map(|key| TmdbConfig {
            api_key: key.to_string(),
            base_url: Some(self.tmdb_base_url.clone()),
            timeout: self.request_timeout(),
        })
    }

    /// TVDB client settings, or `None` when no key is configured.
    pub fn tvdb(&self) -> Option<TvdbConfig> {
        configured_key(&self.tvdb_api_key).map(|key| TvdbConfig {
            api_key: key.to_string(),
            base_url: Some(self.tvdb_base_url.clone()),
            timeout: self.request_timeout(),
        })
    }

    /// Copy of the config safe to log.
    pub fn sanitized(&self) -> SanitizedConfig {
        SanitizedConfig::from(self)
    }
}

/// Sanitized config for logging (API keys redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub tmdb_api_key_configured: bool,
    pub tvdb_api_key_configured: bool,
    pub tmdb_base_url: String,
    pub tvdb_base_url: String,
    pub request_timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            tmdb_api_key_configured: configured_key(&config.tmdb_api_key).is_some(),
            tvdb_api_key_configured: configured_key(&config.tvdb_api_key).is_some(),
            tmdb_base_url: config.tmdb_base_url.clone(),
            tvdb_base_url: config.tvdb_base_url.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.tmdb_api_key.is_none());
        assert!(config.tvdb_api_key.is_none());
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tvdb_base_url, "https://api.thetvdb.com");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "tmdb_api_key": "tmdb-secret",
            "tvdb_api_key": "tvdb-secret",
            "tmdb_base_url": "http://localhost:9000/3",
            "request_timeout_secs": 3
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.tmdb_api_key.as_deref(), Some("tmdb-secret"));
        assert_eq!(config.tmdb_base_url, "http://localhost:9000/3");
        assert_eq!(config.tvdb_base_url, "https://api.thetvdb.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_provider_settings_follow_keys() {
        let config = Config {
            tmdb_api_key: Some("abc".to_string()),
            tvdb_api_key: Some("   ".to_string()),
            ..Config::default()
        };

        let tmdb = config.tmdb().unwrap();
        assert_eq!(tmdb.api_key, "abc");
        assert_eq!(tmdb.base_url.as_deref(), Some("https://api.themoviedb.org/3"));
        assert_eq!(tmdb.timeout, Duration::from_secs(10));
        assert!(config.tvdb().is_none());
    }

    #[test]
    fn test_sanitized_config_hides_keys() {
        let config = Config {
            tmdb_api_key: Some("tmdb-secret".to_string()),
            ..Config::default()
        };
        let sanitized = config.sanitized();
        assert!(sanitized.tmdb_api_key_configured);
        assert!(!sanitized.tvdb_api_key_configured);

        let rendered = serde_json::to_string(&sanitized).unwrap();
        assert!(!rendered.contains("tmdb-secret"));
    }
}
