//! Upstream URL construction and page fetching.
//!
//! # Responsibilities
//! - Build the absolute upstream URL from the relative path
//! - Normalize the requested-language token to the default language
//!   (the upstream only serves default-language content)
//! - Fetch the page body and capture its content-type
//!
//! # Design Decisions
//! - GET only; inbound method, headers and body are never forwarded
//! - No retries and no timeout: a hung upstream stalls only its request
//! - Whole body buffered into memory (pages are HTML/CSS/JS, not media)

use crate::config::UpstreamConfig;
use crate::pipeline::error::PipelineError;
use reqwest::header;

/// An upstream response reduced to what the rewriter needs.
#[derive(Debug, Clone)]
pub struct UpstreamPage {
    pub body: String,
    pub content_type: Option<String>,
}

impl UpstreamPage {
    /// The content-type header, or [`PipelineError::MissingContentType`]
    /// when the upstream omitted it. Checked for every response, even
    /// ones that will never be rewritten.
    pub fn content_type(&self) -> Result<&str, PipelineError> {
        self.content_type
            .as_deref()
            .ok_or(PipelineError::MissingContentType)
    }
}

/// Build the absolute upstream URL for a resolved request.
///
/// When the requested language differs from the default, the requested
/// token inside the URL is replaced with the default token: first
/// occurrence only, or every occurrence when `replace_all_url_tokens`
/// is set.
pub fn build_url(
    upstream: &UpstreamConfig,
    path: &str,
    requested: &str,
    default: &str,
) -> String {
    let url = format!("{}://{}/{}", upstream.scheme, upstream.host, path);
    if requested == default {
        return url;
    }
    if upstream.replace_all_url_tokens {
        url.replace(requested, default)
    } else {
        url.replacen(requested, default, 1)
    }
}

/// Fetch the upstream page, buffering the body as text.
///
/// Transport failure maps to [`PipelineError::Upstream`]; a non-2xx
/// status is passed through like any other page.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<UpstreamPage, PipelineError> {
    let response = client.get(url).send().await?;

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let body = response.text().await?;

    Ok(UpstreamPage { body, content_type })
}
