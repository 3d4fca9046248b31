//! Response assembly.
//!
//! # Responsibilities
//! - Build the 200 response: body, mirrored Content-Type, Content-Language
//! - Build the 500 response for any pipeline failure
//!
//! # Design Decisions
//! - All-or-nothing: a mid-pipeline failure never yields partial or
//!   untranslated content, only the 500
//! - Error detail in the body is a config flag (off → fixed string)

use crate::pipeline::PipelineError;
use axum::body::Body;
use axum::http::{header, HeaderValue, Response, StatusCode};
use axum::response::IntoResponse;

/// Fixed 500 body used when `error_detail` is disabled.
const GENERIC_ERROR_BODY: &str = "an error occurred while proxying the request";

/// The fully processed page, ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct AssembledPage {
    /// Final (possibly rewritten) body text.
    pub body: String,

    /// Content-type mirrored from the upstream response.
    pub content_type: String,

    /// Requested language, emitted as Content-Language.
    pub language: String,
}

/// Build the success response for an assembled page.
pub fn page_response(page: AssembledPage) -> Response<Body> {
    let mut response = Response::new(Body::from(page.body));

    // Both values originated as valid header text (upstream header /
    // configured language code); skip silently if somehow not.
    if let Ok(value) = HeaderValue::from_str(&page.content_type) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&page.language) {
        response
            .headers_mut()
            .insert(header::CONTENT_LANGUAGE, value);
    }

    response
}

/// Build the uniform 500 response for any pipeline failure.
pub fn error_response(error: &PipelineError, error_detail: bool) -> Response<Body> {
    let body = if error_detail {
        format!("proxy error: {error}")
    } else {
        GENERIC_ERROR_BODY.to_string()
    };
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_headers() {
        let response = page_response(AssembledPage {
            body: "<html></html>".into(),
            content_type: "text/html; charset=utf-8".into(),
            language: "fr-fr".into(),
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_LANGUAGE).unwrap(),
            "fr-fr"
        );
    }

    #[test]
    fn test_error_response_with_detail() {
        let response = error_response(&PipelineError::MissingContentType, true);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_without_detail() {
        let response = error_response(&PipelineError::MissingContentType, false);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
