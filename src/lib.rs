//! Localizing Reverse Proxy
//!
//! A transparent HTTP reverse proxy that fetches pages from a fixed
//! upstream host, rewrites language-prefixed URL paths, and substitutes
//! page text using per-language translation dictionaries.
//!
//! # Request Flow
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                  LANG PROXY                    │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌─────────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ pipeline │──▶│  upstream   │──┼──▶ Upstream
//!                    │  │ server  │   │ resolver │   │ URL + fetch │  │    (default
//!                    │  └─────────┘   └──────────┘   └──────┬──────┘  │    language)
//!                    │                                      │         │
//!                    │                                      ▼         │
//!   Client Response  │  ┌─────────┐   ┌───────────────────────────┐   │
//!   ◀────────────────┼──│response │◀──│  rewrite (non-default     │   │
//!                    │  │assembly │   │  HTML only): relocalize   │   │
//!                    │  └─────────┘   │  paths + dictionary subst │   │
//!                    │                └───────────────────────────┘   │
//!                    └────────────────────────────────────────────────┘
//! ```
//!
//! Any failure in any stage surfaces as a single 500 at the handler
//! boundary; no partial or untranslated content is ever returned.

// Core subsystems
pub mod config;
pub mod http;
pub mod pipeline;
pub mod rewrite;

pub use config::ProxyConfig;
pub use http::HttpServer;
