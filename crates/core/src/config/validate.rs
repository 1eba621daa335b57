use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Request timeout is not 0
/// - Provider base URLs are not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "request_timeout_secs cannot be 0".to_string(),
        ));
    }

    for (name, url) in [
        ("tmdb_base_url", &config.tmdb_base_url),
        ("tvdb_base_url", &config.tvdb_base_url),
    ] {
        if url.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_timeout_zero_fails() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_empty_base_url_fails() {
        let config = Config {
            tvdb_base_url: " ".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("tvdb_base_url"));
    }
}
