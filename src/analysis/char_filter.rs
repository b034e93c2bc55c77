//! Char filter implementations for text normalization.
//!
//! Filters pre-process a document before any word is located in it. Offsets
//! reported by the highlighter always refer to the filtered text.
//!
//! # Available Filters
//!
//! - [`markup_strip::MarkupStripCharFilter`] - Removes markup tags
//! - [`ignore_region::IgnoreRegionCharFilter`] - Removes marker-delimited regions
//!
//! # Examples
//!
//! ```
//! use glint::analysis::char_filter::CharFilter;
//! use glint::analysis::char_filter::markup_strip::MarkupStripCharFilter;
//!
//! let filter = MarkupStripCharFilter::new();
//! assert_eq!(filter.filter("<p>Acer <em>rubrum</em></p>"), "Acer rubrum");
//! ```

/// Trait for character filters that transform text before words are located.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Run `input` through every filter in order.
pub fn apply_all(filters: &[Box<dyn CharFilter>], input: &str) -> String {
    filters
        .iter()
        .fold(input.to_string(), |text, filter| filter.filter(&text))
}

pub mod ignore_region;
pub mod markup_strip;
