//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but failed semantic validation.
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServiceConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.trivia.timeout_secs, 5);
        assert_eq!(config.trivia.base_url, "http://numbersapi.com");
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [trivia]
            base_url = "http://127.0.0.1:9999"
            timeout_secs = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.trivia.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.trivia.timeout_secs, 1);
        // Untouched sections keep their defaults
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
