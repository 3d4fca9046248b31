//! HTTP server setup and the per-request pipeline.
//!
//! # Responsibilities
//! - Create the Axum Router with catch-all handlers
//! - Wire up middleware (tracing, request ID)
//! - Resolve path/language, fetch upstream, rewrite, assemble
//! - Hold the single failure boundary: any pipeline error becomes a 500
//!
//! # Design Decisions
//! - Method and inbound body are ignored; only the URL is consulted
//! - No timeout layer: a hung upstream stalls only its own request
//! - The dictionary is loaded fresh per qualifying request, never cached

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::response::{self, AssembledPage};
use crate::pipeline::{error::PipelineError, resolver, upstream};
use crate::rewrite::{relocalize, TranslationDictionary};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub client: reqwest::Client,
}

/// HTTP server for the localizing proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        // Default transport settings, no timeout (a slow upstream may
        // legitimately take a while; nothing else is affected).
        let client = reqwest::Client::new();

        let state = AppState {
            config: Arc::new(config.clone()),
            client,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.host,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Main proxy handler.
/// Runs the pipeline and maps its result through the failure boundary.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %path_and_query,
        "Proxying request"
    );

    match run_pipeline(&state, &path_and_query).await {
        Ok(page) => {
            tracing::debug!(
                request_id = %request_id,
                language = %page.language,
                content_type = %page.content_type,
                "Request served"
            );
            response::page_response(page)
        }
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                path = %path_and_query,
                error = %error,
                "Pipeline failed"
            );
            response::error_response(&error, state.config.listener.error_detail)
        }
    }
}

/// The strictly linear per-request pipeline:
/// resolve → build URL → fetch → rewrite (conditional) → assemble.
async fn run_pipeline(
    state: &AppState,
    path_and_query: &str,
) -> Result<AssembledPage, PipelineError> {
    let config = &state.config;
    let default = &config.languages.default;

    let resolved = resolver::resolve(path_and_query, &config.languages);

    let url = upstream::build_url(
        &config.upstream,
        &resolved.path,
        &resolved.language,
        default,
    );

    tracing::trace!(
        upstream_url = %url,
        language = %resolved.language,
        "Fetching upstream"
    );

    let page = upstream::fetch(&state.client, &url).await?;

    // The content-type check runs for every response; a missing header
    // is an error even when no rewrite would have happened.
    let content_type = page.content_type()?.to_string();
    let qualifies = content_type.contains("text/html") && resolved.language != *default;

    let body = if qualifies {
        let relocalized = relocalize(&page.body, default, &resolved.language, &config.rewrite)?;
        let dictionary = TranslationDictionary::load(
            &config.translations.dir,
            &resolved.language,
            &config.rewrite,
        )
        .await?;
        dictionary.apply(&relocalized)
    } else {
        page.body
    };

    Ok(AssembledPage {
        body,
        content_type,
        language: resolved.language,
    })
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
