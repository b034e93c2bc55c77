//! Query words and whole-word matching.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::{GlintError, Result};

/// A parsed search query: the ordered list of words to highlight.
///
/// Words come from splitting the raw query on whitespace. Order and
/// duplicates are preserved. Matching uses one precompiled case-insensitive
/// alternation of all distinct words, longest first, so a `Query` is
/// immutable and cheap to share across threads once built.
#[derive(Debug, Clone)]
pub struct Query {
    words: Vec<String>,
    /// Alternation of every distinct word; `None` for an empty query.
    combined: Option<Regex>,
    /// One pattern per distinct word, anchored at the start, longest first.
    anchored: Vec<Regex>,
}

impl Query {
    /// Parse a raw query string.
    ///
    /// Quote characters are not special here; use [`strip_quotes`] first if
    /// the raw string may contain them.
    pub fn parse(raw: &str) -> Result<Self> {
        let words: Vec<String> = raw.split_whitespace().map(str::to_string).collect();

        let mut distinct = words.clone();
        distinct.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
        distinct.dedup();

        let escaped: Vec<String> = distinct.iter().map(|word| regex::escape(word)).collect();
        let combined = if escaped.is_empty() {
            None
        } else {
            Some(build_pattern(&escaped.join("|"))?)
        };
        let anchored = escaped
            .iter()
            .map(|word| build_pattern(&format!("^(?:{word})")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Query {
            words,
            combined,
            anchored,
        })
    }

    /// The query words, in the order they were given.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find every whole-word, case-insensitive occurrence of any query word.
    ///
    /// Returns byte ranges into `text`, sorted by position and
    /// non-overlapping. The text is scanned once; where the longest word
    /// found at a position is not whole (e.g. `foo-bar` inside `foo-barx`),
    /// shorter words starting there are tried before moving on.
    pub fn find_matches(&self, text: &str) -> Vec<Range<usize>> {
        let Some(combined) = &self.combined else {
            return Vec::new();
        };

        let mut ranges = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let Some(found) = combined.find_at(text, pos) else {
                break;
            };

            let start = found.start();
            let end = if is_whole_word(text, found.range()) {
                Some(found.end())
            } else {
                self.whole_word_at(text, start)
            };

            match end {
                Some(end) => {
                    ranges.push(start..end);
                    pos = end;
                }
                // Retry one character later; a rejected hit can hide an
                // overlapping one that is properly bounded.
                None => pos = start + first_char_len(&text[start..]),
            }
        }

        merge_overlapping_ranges(ranges)
    }

    /// End of the longest query word that starts at `start` and is whole.
    fn whole_word_at(&self, text: &str, start: usize) -> Option<usize> {
        let rest = &text[start..];
        self.anchored
            .iter()
            .filter_map(|pattern| pattern.find(rest))
            .map(|found| start + found.end())
            .find(|&end| is_whole_word(text, start..end))
    }
}

fn build_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| GlintError::query(format!("Cannot compile query {pattern:?}: {e}")))
}

/// Remove double quote characters from a raw user query.
///
/// Quoted phrase queries would otherwise never match the plain document text.
pub fn strip_quotes(raw: &str) -> String {
    raw.chars().filter(|&c| c != '"').collect()
}

/// Whether `c` counts as part of a word for boundary checks.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_whole_word(text: &str, range: Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn first_char_len(text: &str) -> usize {
    text.chars().next().map_or(1, char::len_utf8)
}

fn merge_overlapping_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|range| (range.start, range.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(current) if range.start < current.end => {
                current.end = current.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}
