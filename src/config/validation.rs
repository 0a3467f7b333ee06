//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Validation is a
//! pure function over the config and collects every violation rather
//! than stopping at the first, so an operator can fix a broken file in
//! one pass.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic violation found in a config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("trivia.base_url must not be empty")]
    EmptyTriviaUrl,

    #[error("trivia.base_url '{0}' is not a valid URL")]
    InvalidTriviaUrl(String),

    #[error("trivia.base_url scheme '{0}' is not supported (use http or https)")]
    UnsupportedTriviaScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a parsed configuration, returning all violations.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    // The metrics address only matters when the exporter is enabled
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.trivia.base_url.is_empty() {
        errors.push(ValidationError::EmptyTriviaUrl);
    } else {
        match Url::parse(&config.trivia.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::UnsupportedTriviaScheme(
                url.scheme().to_string(),
            )),
            Err(_) => errors.push(ValidationError::InvalidTriviaUrl(
                config.trivia.base_url.clone(),
            )),
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    if config.trivia.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("trivia.timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.trivia.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::InvalidBindAddress(
            "not-an-address".to_string()
        )));
        assert!(errors.contains(&ValidationError::ZeroTimeout("trivia.timeout_secs")));
    }

    #[test]
    fn test_rejects_non_http_trivia_scheme() {
        let mut config = ServiceConfig::default();
        config.trivia.base_url = "ftp://numbersapi.com".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsupportedTriviaScheme("ftp".to_string())]
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "nonsense".to_string();

        assert!(validate_config(&config).is_ok());
    }
}
