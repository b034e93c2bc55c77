//! The snippet highlighter: filter, locate, select a window, render.

use std::fmt;

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::HighlightConfig;
use super::locator::{WholeWordLocator, WordLocator};
use super::query::Query;
use super::render::{HtmlTagRenderer, Renderer};
use super::text::TextBlock;
use super::window::{
    DensestWindowSelector, LeadingWindowSelector, LeftExtendingSelector, WindowSelector,
};
use crate::analysis::char_filter::ignore_region::IgnoreRegionCharFilter;
use crate::analysis::char_filter::markup_strip::MarkupStripCharFilter;
use crate::analysis::char_filter::{self, CharFilter};
use crate::error::Result;

/// A rendered snippet together with how it was cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedSnippet {
    /// The rendered excerpt.
    pub text: String,
    /// Start of the excerpt in the filtered text, in characters.
    pub start: usize,
    /// End of the excerpt in the filtered text, in characters.
    pub end: usize,
    /// Matches shown in the excerpt.
    pub matches_in_window: usize,
    /// Matches found in the whole filtered text.
    pub total_matches: usize,
    /// Length of the filtered text, in characters.
    pub text_length: usize,
}

/// Produces one highlighted, length-bounded excerpt per document.
///
/// The highlighter owns its query and configuration and never mutates them,
/// so a single instance can serve many documents concurrently.
///
/// # Examples
///
/// ```
/// use glint::highlight::{HighlightConfig, SnippetHighlighter};
///
/// let highlighter = SnippetHighlighter::new("highlight", HighlightConfig::default()).unwrap();
/// assert_eq!(
///     highlighter.highlight("This is some text with a word to highlight."),
///     "...to <span class=\"highlighted\">highlight</span>."
/// );
/// ```
pub struct SnippetHighlighter {
    config: HighlightConfig,
    query: Query,
    char_filters: Vec<Box<dyn CharFilter>>,
    locator: Box<dyn WordLocator>,
    selector: Box<dyn WindowSelector>,
    renderer: Box<dyn Renderer>,
}

impl fmt::Debug for SnippetHighlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<&str> = self.char_filters.iter().map(|f| f.name()).collect();
        f.debug_struct("SnippetHighlighter")
            .field("config", &self.config)
            .field("query", &self.query.words())
            .field("char_filters", &filters)
            .field("locator", &self.locator.name())
            .field("selector", &self.selector.name())
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

impl SnippetHighlighter {
    /// Create a highlighter for a raw query string.
    ///
    /// Fails if `config.ignore_between` is not a valid pattern.
    pub fn new(query: &str, config: HighlightConfig) -> Result<Self> {
        Self::with_query(Query::parse(query)?, config)
    }

    /// Create a highlighter for an already parsed query.
    pub fn with_query(query: Query, config: HighlightConfig) -> Result<Self> {
        let mut char_filters: Vec<Box<dyn CharFilter>> = vec![Box::new(MarkupStripCharFilter::new())];
        if let Some(marker) = &config.ignore_between {
            char_filters.push(Box::new(IgnoreRegionCharFilter::new(marker)?));
        }

        let selector: Box<dyn WindowSelector> = if config.excerpt {
            Box::new(LeftExtendingSelector::new(DensestWindowSelector))
        } else {
            Box::new(LeadingWindowSelector)
        };

        debug!(
            "Created snippet highlighter: {} query words, max_length={}, excerpt={}, ignore_between={:?}",
            query.len(),
            config.max_length,
            config.excerpt,
            config.ignore_between
        );

        Ok(SnippetHighlighter {
            renderer: Box::new(HtmlTagRenderer::new(&config)),
            config,
            query,
            char_filters,
            locator: Box::new(WholeWordLocator),
            selector,
        })
    }

    /// Replace the word locator.
    pub fn with_locator<L: WordLocator + 'static>(mut self, locator: L) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Replace the window selector.
    pub fn with_selector<S: WindowSelector + 'static>(mut self, selector: S) -> Self {
        self.selector = Box::new(selector);
        self
    }

    /// Replace the renderer.
    pub fn with_renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Render the excerpt for `text`.
    pub fn highlight(&self, text: &str) -> String {
        self.highlight_detailed(text).text
    }

    /// Render the excerpt for `text` and report the window it was cut from.
    pub fn highlight_detailed(&self, text: &str) -> HighlightedSnippet {
        let block = TextBlock::new(char_filter::apply_all(&self.char_filters, text));
        let spans = self.locator.locate(&block, &self.query);
        let window = self.selector.select(&block, &spans, self.config.max_length);

        trace!(
            "Found {} matches in {} chars, window {}..{}",
            spans.len(),
            block.len(),
            window.start,
            window.end
        );

        HighlightedSnippet {
            text: self.renderer.render(&block, &spans, window),
            start: window.start,
            end: window.end,
            matches_in_window: spans.iter().filter(|span| span.is_within(&window)).count(),
            total_matches: spans.len(),
            text_length: block.len(),
        }
    }

    /// Render excerpts for many texts in parallel, preserving input order.
    pub fn highlight_many<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<String> {
        texts
            .par_iter()
            .map(|text| self.highlight(text.as_ref()))
            .collect()
    }
}
