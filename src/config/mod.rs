//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with the request pipeline
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Behavior divergences of the rewriter (slash anchoring, case
//!   sensitivity, first-vs-all URL token replacement, error detail)
//!   are explicit flags, not guesses

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    LanguageConfig, ListenerConfig, ProxyConfig, RewriteConfig, TranslationConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
