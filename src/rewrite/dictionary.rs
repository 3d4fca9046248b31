//! Translation dictionary loading and application.
//!
//! # Responsibilities
//! - Load `{dir}/{language}.json` fresh for every qualifying request
//! - Compile each key as a regular expression, surfacing malformed
//!   patterns as a distinct error
//! - Apply the pairs sequentially, in file order
//!
//! # Design Decisions
//! - No cross-request caching: the file is read and discarded per request
//! - Keys are untrusted patterns and are compiled explicitly up front,
//!   before any substitution runs
//! - Replacement strings are literal (`NoExpand`): a `$` in a dictionary
//!   value never triggers capture-group expansion

use crate::config::RewriteConfig;
use crate::pipeline::error::PipelineError;
use regex::{NoExpand, Regex, RegexBuilder};
use std::path::Path;

/// An ordered list of compiled (pattern, replacement) pairs for one
/// language. Order is the dictionary file's own order and is part of
/// the substitution contract.
#[derive(Debug)]
pub struct TranslationDictionary {
    entries: Vec<DictionaryEntry>,
}

#[derive(Debug)]
struct DictionaryEntry {
    regex: Regex,
    replacement: String,
}

impl TranslationDictionary {
    /// Load and compile the dictionary for `language` from `dir`.
    ///
    /// A missing file is [`PipelineError::DictionaryMissing`]; a file
    /// that is not a flat JSON string map is
    /// [`PipelineError::DictionaryFormat`]; an uncompilable key is
    /// [`PipelineError::MalformedPattern`].
    pub async fn load(
        dir: &str,
        language: &str,
        config: &RewriteConfig,
    ) -> Result<Self, PipelineError> {
        let path = Path::new(dir).join(format!("{language}.json"));

        let raw = tokio::fs::read_to_string(&path).await.map_err(|source| {
            PipelineError::DictionaryMissing {
                language: language.to_string(),
                source,
            }
        })?;

        // preserve_order keeps the map in file order.
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| PipelineError::DictionaryFormat {
                language: language.to_string(),
                reason: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(map.len());
        for (pattern, value) in map {
            let replacement = value
                .as_str()
                .ok_or_else(|| PipelineError::DictionaryFormat {
                    language: language.to_string(),
                    reason: format!("value for key `{pattern}` is not a string"),
                })?
                .to_string();

            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(config.case_insensitive)
                .build()
                .map_err(|source| PipelineError::MalformedPattern { pattern, source })?;

            entries.push(DictionaryEntry { regex, replacement });
        }

        Ok(Self { entries })
    }

    /// Apply every pair to `body`, sequentially and globally.
    ///
    /// Later patterns see the output of earlier replacements.
    pub fn apply(&self, body: &str) -> String {
        let mut content = body.to_string();
        for entry in &self.entries {
            content = entry
                .regex
                .replace_all(&content, NoExpand(&entry.replacement))
                .into_owned();
        }
        content
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
