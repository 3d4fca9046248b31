//! Pipeline error taxonomy.
//!
//! One variant per failure kind so tests can distinguish them without
//! string matching. All variants surface to the client as a single 500
//! at the handler boundary.

use thiserror::Error;

/// Failure of any stage of the request pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The outbound fetch could not complete (DNS, connect, TLS, body read).
    /// A non-2xx upstream status is NOT this error; only transport failure is.
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream response carried no content-type header, so the
    /// HTML qualification check cannot run.
    #[error("upstream response has no content-type header")]
    MissingContentType,

    /// No dictionary file exists for the requested language.
    #[error("no translation dictionary for language `{language}`: {source}")]
    DictionaryMissing {
        language: String,
        source: std::io::Error,
    },

    /// The dictionary file exists but is not a flat JSON string map.
    #[error("invalid translation dictionary for `{language}`: {reason}")]
    DictionaryFormat { language: String, reason: String },

    /// A dictionary key is not a valid regular expression.
    #[error("malformed dictionary pattern `{pattern}`: {source}")]
    MalformedPattern {
        pattern: String,
        source: regex::Error,
    },
}
