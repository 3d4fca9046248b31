//! Path and language resolution.
//!
//! # Responsibilities
//! - Strip the leading slash from the inbound path-and-query
//! - Detect the requested language from the first path segment
//! - Fall back to the default language when nothing matches
//!
//! # Design Decisions
//! - Pure string-prefix test, declared order decides priority
//! - No regex, no case folding, no slash normalization
//! - An empty path (root request) always resolves to the default

use crate::config::LanguageConfig;

/// Outcome of resolving an inbound request URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Path segments after the authority, query string included,
    /// without the leading slash.
    pub path: String,

    /// Requested language: the first supported code the path starts
    /// with, or the configured default.
    pub language: String,
}

/// Resolve the relative path and requested language for a request.
///
/// `path_and_query` is the raw URI path plus optional query, as received
/// (e.g. `/fr-fr/page?x=1`).
pub fn resolve(path_and_query: &str, languages: &LanguageConfig) -> Resolved {
    let path = path_and_query
        .strip_prefix('/')
        .unwrap_or(path_and_query)
        .to_string();

    let language = languages
        .supported
        .iter()
        .find(|code| path.starts_with(code.as_str()))
        .unwrap_or(&languages.default)
        .clone();

    Resolved { path, language }
}
