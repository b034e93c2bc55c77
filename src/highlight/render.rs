//! Turning a window and its matches into output text.

use super::ELLIPSIS;
use super::config::HighlightConfig;
use super::text::{ExcerptWindow, MatchSpan, TextBlock};

/// Renders the excerpt for a window of a text block.
pub trait Renderer: Send + Sync {
    fn render(&self, text: &TextBlock, spans: &[MatchSpan], window: ExcerptWindow) -> String;

    /// Get the name of this renderer.
    fn name(&self) -> &'static str;
}

/// Wraps each match inside the window in an HTML tag and marks truncated
/// ends with an ellipsis.
#[derive(Debug, Clone)]
pub struct HtmlTagRenderer {
    opening_tag: String,
    closing_tag: String,
}

impl HtmlTagRenderer {
    pub fn new(config: &HighlightConfig) -> Self {
        HtmlTagRenderer {
            opening_tag: config.opening_tag(),
            closing_tag: config.closing_tag(),
        }
    }
}

impl Default for HtmlTagRenderer {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

impl Renderer for HtmlTagRenderer {
    fn render(&self, text: &TextBlock, spans: &[MatchSpan], window: ExcerptWindow) -> String {
        let mut inside: Vec<MatchSpan> = spans
            .iter()
            .filter(|span| !span.is_empty() && span.is_within(&window))
            .copied()
            .collect();
        inside.sort();

        let mut result = String::new();
        if window.start > 0 {
            result.push_str(ELLIPSIS);
        }

        let mut cursor = window.start;
        for span in inside {
            if span.start < cursor {
                continue;
            }
            result.push_str(text.slice(cursor, span.start));
            result.push_str(&self.opening_tag);
            result.push_str(text.slice(span.start, span.end));
            result.push_str(&self.closing_tag);
            cursor = span.end;
        }
        result.push_str(text.slice(cursor, window.end));

        if window.end < text.len() {
            result.push_str(ELLIPSIS);
        }

        result
    }

    fn name(&self) -> &'static str {
        "html_tag"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_whole_text() {
        let text = TextBlock::new("Acer rubrum is a maple.");
        let rendered = HtmlTagRenderer::default().render(
            &text,
            &[MatchSpan::new(0, 4)],
            ExcerptWindow::new(0, 23),
        );
        assert_eq!(rendered, "<span class=\"highlighted\">Acer</span> rubrum is a maple.");
    }

    #[test]
    fn test_render_adds_ellipses() {
        let text = TextBlock::new("Acer rubrum is a maple.");
        let rendered = HtmlTagRenderer::default().render(
            &text,
            &[MatchSpan::new(5, 11)],
            ExcerptWindow::new(5, 14),
        );
        assert_eq!(rendered, "...<span class=\"highlighted\">rubrum</span> is...");
    }

    #[test]
    fn test_render_skips_spans_outside_window() {
        let config = HighlightConfig::new().tag("mark".to_string()).no_css_class();
        let text = TextBlock::new("one two three two one");
        let spans = [MatchSpan::new(4, 7), MatchSpan::new(14, 17), MatchSpan::new(12, 15)];
        let rendered = HtmlTagRenderer::new(&config).render(&text, &spans, ExcerptWindow::new(0, 13));
        assert_eq!(rendered, "one <mark>two</mark> three...");
    }

    #[test]
    fn test_render_empty_text() {
        let text = TextBlock::new("");
        let rendered = HtmlTagRenderer::default().render(&text, &[], ExcerptWindow::new(0, 0));
        assert_eq!(rendered, "");
    }
}
