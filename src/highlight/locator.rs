//! Locating query words in a text block.

use super::query::Query;
use super::text::{MatchSpan, TextBlock};

/// Finds the spans of a text that should be highlighted for a query.
pub trait WordLocator: Send + Sync {
    /// Return the non-overlapping spans of every query word found in `text`.
    fn locate(&self, text: &TextBlock, query: &Query) -> Vec<MatchSpan>;

    /// Get the name of this locator.
    fn name(&self) -> &'static str;
}

/// Whole-word, case-insensitive literal matching of every query word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeWordLocator;

impl WordLocator for WholeWordLocator {
    fn locate(&self, text: &TextBlock, query: &Query) -> Vec<MatchSpan> {
        if query.is_empty() || text.is_empty() {
            return Vec::new();
        }

        query
            .find_matches(text.as_str())
            .into_iter()
            .map(|range| MatchSpan::new(text.char_offset(range.start), text.char_offset(range.end)))
            .collect()
    }

    fn name(&self) -> &'static str {
        "whole_word"
    }
}
