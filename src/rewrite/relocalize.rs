//! Path re-localization.
//!
//! Upstream pages embed links pointing at default-language paths. This
//! stage rewrites every such token to the requested language so client
//! navigation stays within it.

use crate::config::RewriteConfig;
use crate::pipeline::error::PipelineError;
use regex::{NoExpand, RegexBuilder};

/// Replace every default-language path token in `body` with the
/// requested-language token.
///
/// With `slash_anchored` the token only matches when preceded by `/`
/// (so `en-us` inside prose is left alone); the replacement then carries
/// the slash too. Matching honors the `case_insensitive` flag.
pub fn relocalize(
    body: &str,
    default: &str,
    requested: &str,
    config: &RewriteConfig,
) -> Result<String, PipelineError> {
    let (pattern, replacement) = if config.slash_anchored {
        (format!("/{}", regex::escape(default)), format!("/{requested}"))
    } else {
        (regex::escape(default), requested.to_string())
    };

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(config.case_insensitive)
        .build()
        .map_err(|source| PipelineError::MalformedPattern { pattern, source })?;

    Ok(regex.replace_all(body, NoExpand(&replacement)).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RewriteConfig {
        RewriteConfig {
            slash_anchored: true,
            case_insensitive: false,
        }
    }

    #[test]
    fn test_every_anchored_token_is_rewritten() {
        let body = r#"<a href="/en-us/x">one</a> <a href="/en-us/y">two</a>"#;
        let out = relocalize(body, "en-us", "fr-fr", &config()).unwrap();
        assert_eq!(out, r#"<a href="/fr-fr/x">one</a> <a href="/fr-fr/y">two</a>"#);
    }

    #[test]
    fn test_unanchored_token_left_alone_when_slash_anchored() {
        let body = "locale en-us is served at /en-us/home";
        let out = relocalize(body, "en-us", "it-it", &config()).unwrap();
        assert_eq!(out, "locale en-us is served at /it-it/home");
    }

    #[test]
    fn test_unanchored_mode_rewrites_bare_tokens() {
        let mut cfg = config();
        cfg.slash_anchored = false;
        let out = relocalize("locale en-us, path /en-us/home", "en-us", "it-it", &cfg).unwrap();
        assert_eq!(out, "locale it-it, path /it-it/home");
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let out = relocalize("/EN-US/home", "en-us", "fr-fr", &config()).unwrap();
        assert_eq!(out, "/EN-US/home");
    }

    #[test]
    fn test_case_insensitive_flag() {
        let mut cfg = config();
        cfg.case_insensitive = true;
        let out = relocalize("/EN-US/home", "en-us", "fr-fr", &cfg).unwrap();
        assert_eq!(out, "/fr-fr/home");
    }

    #[test]
    fn test_token_is_escaped_not_treated_as_regex() {
        // "-" and "." must be literal; "en.us" would otherwise match "enXus".
        let out = relocalize("/enXus/home", "en.us", "fr-fr", &config()).unwrap();
        assert_eq!(out, "/enXus/home");
    }
}
