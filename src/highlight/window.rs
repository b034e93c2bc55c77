//! Choosing which part of a text becomes the excerpt.

use super::text::{ExcerptWindow, MatchSpan, TextBlock};

/// Picks the excerpt window for a text and its match spans.
///
/// Implementations must return a window with
/// `start <= end <= text.len()` and `end - start <= max_length`.
pub trait WindowSelector: Send + Sync {
    fn select(&self, text: &TextBlock, spans: &[MatchSpan], max_length: usize) -> ExcerptWindow;

    /// Get the name of this selector.
    fn name(&self) -> &'static str;
}

/// Always shows the beginning of the text. Used when excerpting is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingWindowSelector;

impl WindowSelector for LeadingWindowSelector {
    fn select(&self, text: &TextBlock, _spans: &[MatchSpan], max_length: usize) -> ExcerptWindow {
        ExcerptWindow::leading(text.len(), max_length)
    }

    fn name(&self) -> &'static str {
        "leading"
    }
}

/// Selects the window holding the most complete matches.
///
/// Candidate windows start at a match. Among windows fully containing the
/// same number of matches, the one starting at the earliest match wins.
/// With no matches the text is shown from the beginning.
#[derive(Debug, Clone, Copy, Default)]
pub struct DensestWindowSelector;

impl WindowSelector for DensestWindowSelector {
    fn select(&self, text: &TextBlock, spans: &[MatchSpan], max_length: usize) -> ExcerptWindow {
        if spans.is_empty() {
            return ExcerptWindow::leading(text.len(), max_length);
        }

        let mut sorted = spans.to_vec();
        sorted.sort();

        let mut best_start = sorted[0].start;
        let mut best_count = 0;
        let mut end_index = 0;

        for (i, first) in sorted.iter().enumerate() {
            end_index = end_index.max(i);
            while end_index < sorted.len() && sorted[end_index].end - first.start <= max_length {
                end_index += 1;
            }

            let count = end_index - i;
            if count > best_count {
                best_count = count;
                best_start = first.start;
            }
        }

        let start = best_start.min(text.len());
        ExcerptWindow::new(start, start.saturating_add(max_length).min(text.len()))
    }

    fn name(&self) -> &'static str {
        "densest"
    }
}

/// Decorates another selector so the excerpt opens with one whole word of
/// context.
///
/// When the inner window does not start at 0, its start moves back over any
/// whitespace and then over the preceding word. If that reaches the start of
/// the text the excerpt simply starts at 0. The end is then pulled in so the
/// window never exceeds `max_length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftExtendingSelector<S> {
    inner: S,
}

impl<S: WindowSelector> LeftExtendingSelector<S> {
    pub fn new(inner: S) -> Self {
        LeftExtendingSelector { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: WindowSelector> WindowSelector for LeftExtendingSelector<S> {
    fn select(&self, text: &TextBlock, spans: &[MatchSpan], max_length: usize) -> ExcerptWindow {
        let window = self.inner.select(text, spans, max_length);
        if window.start == 0 {
            return window;
        }

        let start = preceding_word_start(text, window.start);
        let end = window.end.min(start.saturating_add(max_length));
        ExcerptWindow::new(start, end)
    }

    fn name(&self) -> &'static str {
        "left_extending"
    }
}

/// Start of the whitespace-delimited word before character offset `from`.
fn preceding_word_start(text: &TextBlock, from: usize) -> usize {
    let is_space_at = |pos: usize| text.char_at(pos).is_some_and(char::is_whitespace);

    let mut pos = from.min(text.len());
    while pos > 0 && is_space_at(pos - 1) {
        pos -= 1;
    }
    while pos > 0 && !is_space_at(pos - 1) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(ranges: &[(usize, usize)]) -> Vec<MatchSpan> {
        ranges.iter().map(|&(s, e)| MatchSpan::new(s, e)).collect()
    }

    #[test]
    fn test_leading_selector() {
        let text = TextBlock::new("x".repeat(300));
        let window = LeadingWindowSelector.select(&text, &spans(&[(250, 255)]), 200);
        assert_eq!(window, ExcerptWindow::new(0, 200));
    }

    #[test]
    fn test_densest_without_spans() {
        let text = TextBlock::new("short text");
        let window = DensestWindowSelector.select(&text, &[], 200);
        assert_eq!(window, ExcerptWindow::new(0, 10));
    }

    #[test]
    fn test_densest_single_far_match() {
        let text = TextBlock::new("y".repeat(250));
        let window = DensestWindowSelector.select(&text, &spans(&[(30, 35)]), 200);
        assert_eq!(window, ExcerptWindow::new(30, 230));

        let window = DensestWindowSelector.select(&text, &spans(&[(240, 245)]), 200);
        assert_eq!(window, ExcerptWindow::new(240, 250));
    }

    #[test]
    fn test_densest_prefers_cluster() {
        let text = TextBlock::new("z".repeat(400));
        let found = spans(&[(10, 14), (150, 154), (160, 164), (170, 174)]);
        let window = DensestWindowSelector.select(&text, &found, 50);
        assert_eq!(window, ExcerptWindow::new(150, 200));
    }

    #[test]
    fn test_densest_tie_prefers_earliest() {
        let text = TextBlock::new("z".repeat(400));
        let found = spans(&[(300, 304), (20, 24), (100, 104)]);
        let window = DensestWindowSelector.select(&text, &found, 50);
        assert_eq!(window, ExcerptWindow::new(20, 70));
    }

    #[test]
    fn test_densest_requires_full_containment() {
        let text = TextBlock::new("z".repeat(400));
        // All three spans start within 50 characters of offset 10, but the
        // window opened there fully contains only the first one.
        let found = spans(&[(10, 14), (58, 62), (64, 68)]);
        let window = DensestWindowSelector.select(&text, &found, 50);
        assert_eq!(window, ExcerptWindow::new(58, 108));
    }

    #[test]
    fn test_left_extension_adds_one_word() {
        let text = TextBlock::new("This is some text with a word to highlight.");
        let selector = LeftExtendingSelector::new(DensestWindowSelector);
        let window = selector.select(&text, &spans(&[(33, 42)]), 200);
        assert_eq!(window, ExcerptWindow::new(30, 43));
    }

    #[test]
    fn test_left_extension_reaching_start() {
        let text = TextBlock::new("Please highlight and excerpt this text.");
        let selector = LeftExtendingSelector::new(DensestWindowSelector);
        let window = selector.select(&text, &spans(&[(7, 16)]), 200);
        assert_eq!(window, ExcerptWindow::new(0, 39));

        let text = TextBlock::new("   highlight");
        let window = selector.select(&text, &spans(&[(3, 12)]), 200);
        assert_eq!(window, ExcerptWindow::new(0, 12));
    }

    #[test]
    fn test_left_extension_respects_max_length() {
        let text = TextBlock::new("alpha beta gamma delta");
        let selector = LeftExtendingSelector::new(DensestWindowSelector);
        // Inner window is 11..16 ("gamma"); extension pulls in "beta ".
        let window = selector.select(&text, &spans(&[(11, 16)]), 5);
        assert_eq!(window, ExcerptWindow::new(6, 11));
        assert!(window.len() <= 5);
    }

    #[test]
    fn test_left_extension_leaves_zero_start() {
        let text = TextBlock::new("highlight me");
        let selector = LeftExtendingSelector::new(DensestWindowSelector);
        let window = selector.select(&text, &spans(&[(0, 9)]), 200);
        assert_eq!(window, ExcerptWindow::new(0, 12));
    }
}
