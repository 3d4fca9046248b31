//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! proxy. All types derive Serde traits for deserialization from config
//! files, and every section has defaults so a minimal config works.

use serde::{Deserialize, Serialize};

/// Root configuration for the localizing proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address, error body detail).
    pub listener: ListenerConfig,

    /// Upstream origin the proxy fetches from.
    pub upstream: UpstreamConfig,

    /// Supported languages and the upstream's native language.
    pub languages: LanguageConfig,

    /// Where per-language dictionary files live.
    pub translations: TranslationConfig,

    /// Content rewriting behavior flags.
    pub rewrite: RewriteConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Include the underlying failure message in 500 bodies.
    /// When false a fixed plain-text string is returned instead.
    pub error_detail: bool,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            error_detail: true,
        }
    }
}

/// Upstream origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// URL scheme for upstream fetches ("https" in deployment;
    /// "http" is accepted for test upstreams).
    pub scheme: String,

    /// Upstream host, optionally with a port (e.g., "www.example.com").
    pub host: String,

    /// Replace every occurrence of the requested-language token in the
    /// upstream URL instead of only the first.
    pub replace_all_url_tokens: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: "www.example.com".to_string(),
            replace_all_url_tokens: false,
        }
    }
}

/// Supported language codes and the default (upstream-native) language.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Supported codes; declared order decides prefix-match priority.
    pub supported: Vec<String>,

    /// The language the upstream natively serves. All upstream fetches
    /// are normalized to this language.
    pub default: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            supported: vec![
                "en-us".to_string(),
                "fr-fr".to_string(),
                "it-it".to_string(),
            ],
            default: "en-us".to_string(),
        }
    }
}

/// Dictionary file location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Directory holding `{language}.json` dictionary files.
    pub dir: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            dir: "translations".to_string(),
        }
    }
}

/// Content rewriter behavior flags.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Only rewrite language tokens preceded by `/` during path
    /// re-localization.
    pub slash_anchored: bool,

    /// Match tokens and dictionary patterns case-insensitively.
    pub case_insensitive: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            slash_anchored: true,
            case_insensitive: false,
        }
    }
}
