//! Bolding query words inside an HTML fragment without excerpting it.

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use super::query::Query;
use crate::error::Result;

lazy_static! {
    static ref TAG_SEGMENT: Regex = Regex::new(r"</?[A-Za-z!?][^>]*>").unwrap();
}

/// Wraps every whole-word match of the query in `<b>` tags, leaving markup
/// (tag names and attribute values) untouched.
#[derive(Debug, Clone)]
pub struct InlineHighlighter {
    query: Query,
}

impl InlineHighlighter {
    pub fn new(query: &str) -> Result<Self> {
        Ok(Self::from_query(Query::parse(query)?))
    }

    pub fn from_query(query: Query) -> Self {
        InlineHighlighter { query }
    }

    /// Highlight `html`, returning it in full with matches bolded.
    pub fn highlight(&self, html: &str) -> String {
        if self.query.is_empty() {
            return html.to_string();
        }

        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        for tag in TAG_SEGMENT.find_iter(html) {
            self.bold_into(&mut result, &html[last_end..tag.start()]);
            result.push_str(tag.as_str());
            last_end = tag.end();
        }
        self.bold_into(&mut result, &html[last_end..]);

        result
    }

    fn bold_into(&self, out: &mut String, segment: &str) {
        let mut cursor = 0;
        for range in self.query.find_matches(segment) {
            out.push_str(&segment[cursor..range.start]);
            out.push_str("<b>");
            out.push_str(&segment[range.clone()]);
            out.push_str("</b>");
            cursor = range.end;
        }
        out.push_str(&segment[cursor..]);
    }
}

/// Bold every occurrence of the query's words in an HTML fragment.
///
/// An empty query returns the input unchanged.
///
/// ```
/// use glint::highlight::quick_highlight;
///
/// assert_eq!(
///     quick_highlight(r#"<a href="acer">Acer rubrum</a>"#, "acer"),
///     r#"<a href="acer"><b>Acer</b> rubrum</a>"#
/// );
/// ```
pub fn quick_highlight(html: &str, query: &str) -> String {
    match InlineHighlighter::new(query) {
        Ok(highlighter) => highlighter.highlight(html),
        Err(e) => {
            warn!("Leaving text unhighlighted: {e}");
            html.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_highlight_skips_attributes() {
        let html = r#"<a href="acer">Acer rubrum</a>"#;
        assert_eq!(quick_highlight(html, "acer"), r#"<a href="acer"><b>Acer</b> rubrum</a>"#);
    }

    #[test]
    fn test_quick_highlight_empty_query() {
        let html = "<p>Acer <i>rubrum</i></p>";
        assert_eq!(quick_highlight(html, ""), html);
        assert_eq!(quick_highlight(html, "   "), html);
    }

    #[test]
    fn test_quick_highlight_multiple_words() {
        let html = "<p class=\"maple\">Red maple, Acer rubrum.</p>";
        assert_eq!(
            quick_highlight(html, "maple rubrum"),
            "<p class=\"maple\">Red <b>maple</b>, Acer <b>rubrum</b>.</p>"
        );
    }

    #[test]
    fn test_quick_highlight_whole_words_only() {
        assert_eq!(quick_highlight("maples and maple", "maple"), "maples and <b>maple</b>");
    }

    #[test]
    fn test_quick_highlight_tag_name_matching_query() {
        let html = "<b>bold</b> b";
        assert_eq!(quick_highlight(html, "b"), "<b>bold</b> <b>b</b>");
    }

    #[test]
    fn test_quick_highlight_unclosed_tag_is_text() {
        assert_eq!(quick_highlight("1 < acer", "acer"), "1 < <b>acer</b>");
    }

    #[test]
    fn test_quick_highlight_comparison_signs_are_text() {
        assert_eq!(
            quick_highlight("<p>petals < 5 and sepals > 2</p>", "sepals"),
            "<p>petals < 5 and <b>sepals</b> > 2</p>"
        );
    }

    #[test]
    fn test_inline_highlighter_reuse() {
        let highlighter = InlineHighlighter::new("acer").unwrap();
        assert_eq!(highlighter.highlight("acer"), "<b>acer</b>");
        assert_eq!(highlighter.highlight("<acer>"), "<acer>");
    }
}
