//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the default language is actually a supported language
//! - Reject an upstream scheme/host pair that cannot form a URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ProxyConfig;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener bind_address `{0}` is not a valid socket address")]
    BadBindAddress(String),

    #[error("upstream host must not be empty")]
    EmptyUpstreamHost,

    #[error("upstream scheme `{0}` is not supported (expected http or https)")]
    BadUpstreamScheme(String),

    #[error("upstream base URL `{0}` is invalid")]
    BadUpstreamUrl(String),

    #[error("supported language list must not be empty")]
    NoLanguages,

    #[error("default language `{0}` is not in the supported list")]
    DefaultNotSupported(String),

    #[error("translations dir must not be empty")]
    EmptyTranslationsDir,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BadBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.upstream.host.is_empty() {
        errors.push(ValidationError::EmptyUpstreamHost);
    } else {
        match config.upstream.scheme.as_str() {
            "http" | "https" => {
                let base = format!("{}://{}/", config.upstream.scheme, config.upstream.host);
                if Url::parse(&base).is_err() {
                    errors.push(ValidationError::BadUpstreamUrl(base));
                }
            }
            other => {
                errors.push(ValidationError::BadUpstreamScheme(other.to_string()));
            }
        }
    }

    if config.languages.supported.is_empty() {
        errors.push(ValidationError::NoLanguages);
    } else if !config.languages.supported.contains(&config.languages.default) {
        errors.push(ValidationError::DefaultNotSupported(
            config.languages.default.clone(),
        ));
    }

    if config.translations.dir.is_empty() {
        errors.push(ValidationError::EmptyTranslationsDir);
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
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn test_default_language_must_be_supported() {
        let mut config = ProxyConfig::default();
        config.languages.default = "de-de".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DefaultNotSupported("de-de".into())));
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let mut config = ProxyConfig::default();
        config.upstream.scheme = "ftp".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::BadUpstreamScheme("ftp".into())));
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.host = String::new();
        config.languages.supported.clear();
        config.translations.dir = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_host_with_port_is_valid() {
        let mut config = ProxyConfig::default();
        config.upstream.scheme = "http".into();
        config.upstream.host = "127.0.0.1:38080".into();
        assert!(validate_config(&config).is_ok());
    }
}
