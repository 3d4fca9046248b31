//! Request pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! inbound path-and-query
//!     → resolver.rs (relative path + requested language)
//!     → upstream.rs (build normalized upstream URL, fetch page)
//!     → [rewrite layer, only for non-default HTML] (see crate::rewrite)
//!     → http/response.rs (assemble outbound response)
//! ```
//!
//! # Design Decisions
//! - Each stage returns Result<_, PipelineError>; no stage recovers locally
//! - The upstream is always queried in the default language
//! - No retries, no timeouts, no streaming: pages are small and buffered whole

pub mod error;
pub mod resolver;
pub mod upstream;

pub use error::PipelineError;
pub use resolver::Resolved;
pub use upstream::UpstreamPage;
