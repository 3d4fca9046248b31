//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all routes, failure boundary)
//!     → request.rs (add request ID for correlation)
//!     → [pipeline resolves, fetches, rewrites] (see crate::pipeline)
//!     → response.rs (assemble success or 500 response)
//!     → send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
