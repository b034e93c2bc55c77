//! Query-aware excerpting and highlighting of document text.
//!
//! Two independent highlighters live here:
//!
//! - [`SnippetHighlighter`] cuts one bounded excerpt out of a document and
//!   wraps the query words in it. It is a pipeline of [`CharFilter`]s,
//!   a [`WordLocator`], a [`WindowSelector`] and a [`Renderer`], each of
//!   which can be swapped.
//! - [`quick_highlight`] / [`InlineHighlighter`] bold every query word in an
//!   HTML fragment, skipping over markup, without excerpting.
//!
//! [`CharFilter`]: crate::analysis::char_filter::CharFilter

pub mod config;
pub mod inline;
pub mod locator;
pub mod query;
pub mod render;
pub mod snippet;
pub mod text;
pub mod window;

pub use config::{HighlightConfig, parse_excerpt_flag};
pub use inline::{InlineHighlighter, quick_highlight};
pub use locator::{WholeWordLocator, WordLocator};
pub use query::{Query, strip_quotes};
pub use render::{HtmlTagRenderer, Renderer};
pub use snippet::{HighlightedSnippet, SnippetHighlighter};
pub use text::{ExcerptWindow, MatchSpan, TextBlock};
pub use window::{DensestWindowSelector, LeadingWindowSelector, LeftExtendingSelector, WindowSelector};

/// Marker added where an excerpt cuts the text short.
pub const ELLIPSIS: &str = "...";
