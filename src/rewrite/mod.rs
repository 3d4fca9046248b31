//! Content rewriting subsystem.
//!
//! # Data Flow
//! ```text
//! upstream HTML body (default language)
//!     → relocalize.rs (default-language path tokens → requested language)
//!     → dictionary.rs (load {dir}/{lang}.json, apply pattern→replacement
//!       pairs sequentially, in file order)
//!     → rewritten body
//! ```
//!
//! # Design Decisions
//! - Runs only for non-default languages on text/html responses
//! - Raw text substitution; no HTML/DOM awareness by design
//! - Dictionary order is a contract: later patterns may match text
//!   introduced by earlier replacements (non-commutative, documented)
//! - Re-applying the dictionary to its own output is NOT safe in
//!   general; dictionaries must be authored with that in mind

pub mod dictionary;
pub mod relocalize;

pub use dictionary::TranslationDictionary;
pub use relocalize::relocalize;
