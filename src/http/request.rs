//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Add it as early as possible so every log line can carry it
//!
//! # Design Decisions
//! - An ID supplied by the client is kept, not overwritten
//! - Plain tower layer; no per-request allocation beyond the ID itself

use axum::http::{HeaderValue, Request};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that stamps `x-request-id` onto inbound requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Middleware service produced by [`RequestIdLayer`].
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                request.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use tower::ServiceExt;

    fn probe_service(
    ) -> impl Service<Request<Body>, Response = Option<HeaderValue>, Error = std::convert::Infallible>
    {
        RequestIdLayer.layer(tower::service_fn(|req: Request<Body>| async move {
            Ok(req.headers().get(X_REQUEST_ID).cloned())
        }))
    }

    #[tokio::test]
    async fn test_id_added_when_absent() {
        let request = Request::builder().body(Body::empty()).unwrap();
        let seen = probe_service().oneshot(request).await.unwrap();
        let value = seen.expect("request id should be stamped");
        assert_eq!(value.to_str().unwrap().len(), 36); // uuid v4 text form
    }

    #[tokio::test]
    async fn test_client_supplied_id_is_kept() {
        let request = Request::builder()
            .header(X_REQUEST_ID, "client-id")
            .body(Body::empty())
            .unwrap();
        let seen = probe_service().oneshot(request).await.unwrap();
        assert_eq!(seen.unwrap(), "client-id");
    }
}
