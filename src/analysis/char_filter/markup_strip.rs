use lazy_static::lazy_static;
use regex::Regex;

use super::CharFilter;

lazy_static! {
    static ref TAG_PATTERN: Regex = Regex::new(r"</?[A-Za-z!?][^>]*>").unwrap();
}

/// A char filter that removes markup tags, keeping the text between them.
///
/// A tag must open with a name (or `!`/`?` for comments, doctypes and
/// processing instructions). A `<` followed by anything else, or never
/// closed, is left in place as text.
#[derive(Debug, Clone, Default)]
pub struct MarkupStripCharFilter;

impl MarkupStripCharFilter {
    /// Create a new markup strip char filter.
    pub fn new() -> Self {
        MarkupStripCharFilter
    }
}

impl CharFilter for MarkupStripCharFilter {
    fn filter(&self, input: &str) -> String {
        TAG_PATTERN.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "markup_strip"
    }
}
