//! Character-offset view over a document and the spans/windows measured in it.

use serde::{Deserialize, Serialize};

/// The filtered document text, indexed by character rather than byte.
///
/// All offsets exposed by the highlighter (match spans, excerpt windows and
/// the maximum excerpt length) count characters. `TextBlock` keeps a table of
/// byte offsets so slicing by character stays O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    text: String,
    /// Byte offset of every character, plus `text.len()` as a final entry.
    offsets: Vec<usize>,
}

impl TextBlock {
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        TextBlock { text, offsets }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Slice by character offsets. Offsets past the end are clamped.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    /// Convert a byte offset into a character offset.
    ///
    /// A byte offset inside a multi-byte character maps to the following
    /// character.
    pub fn char_offset(&self, byte: usize) -> usize {
        self.offsets.binary_search(&byte).unwrap_or_else(|i| i)
    }

    /// The character at character offset `index`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        if index >= self.len() {
            return None;
        }
        self.text[self.offsets[index]..].chars().next()
    }
}

/// One occurrence of a query word, as a half-open character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        MatchSpan { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether this span lies fully inside `window`.
    pub fn is_within(&self, window: &ExcerptWindow) -> bool {
        self.start >= window.start && self.end <= window.end
    }
}

/// The half-open character range of the text that gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptWindow {
    pub start: usize,
    pub end: usize,
}

impl ExcerptWindow {
    pub fn new(start: usize, end: usize) -> Self {
        ExcerptWindow { start, end }
    }

    /// The window starting at offset 0 and spanning at most `max_length`
    /// characters of a text of `text_len` characters.
    pub fn leading(text_len: usize, max_length: usize) -> Self {
        ExcerptWindow::new(0, max_length.min(text_len))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
