use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable prefix for config overrides, e.g. `MEDIASORT_TMDB_API_KEY`.
pub const ENV_PREFIX: &str = "MEDIASORT_";

/// Keys taken from the environment verbatim.
///
/// `Env` parses values, so an all-digit key would arrive as an integer and
/// lose any leading zeros.
const VERBATIM_ENV_KEYS: &[&str] = &["tmdb_api_key", "tvdb_api_key"];

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let mut figment = Figment::new()
        .merge(Json::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(VERBATIM_ENV_KEYS));

    for key in VERBATIM_ENV_KEYS {
        let var = format!("{}{}", ENV_PREFIX, key.to_uppercase());
        if let Ok(value) = std::env::var(&var) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }

    let config: Config = figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from JSON string (useful for testing)
pub fn load_config_from_str(json: &str) -> Result<Config, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
}
