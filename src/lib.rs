//! # Glint
//!
//! Query-aware excerpting and highlighting for search result listings.
//!
//! ## Features
//!
//! - One bounded excerpt per document, chosen to show as many matches as fit
//! - Whole-word, case-insensitive matching of query words
//! - Markup stripping and marker-delimited ignore regions
//! - Inline bolding of query words inside HTML without touching markup
//! - Pluggable locator, window selector and renderer strategies

pub mod analysis;
pub mod cli;
pub mod error;
pub mod highlight;

pub mod prelude {
    pub use crate::error::{GlintError, Result};
    pub use crate::highlight::{HighlightConfig, SnippetHighlighter, quick_highlight};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
