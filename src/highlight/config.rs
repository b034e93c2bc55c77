//! Highlighter configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Default maximum excerpt length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 200;

/// Configuration for snippet highlighting.
///
/// Every field has a default, so a JSON configuration file only needs to
/// name the fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Maximum number of characters of document text shown in an excerpt.
    pub max_length: usize,
    /// HTML tag to wrap highlighted words (e.g., "span", "mark", "em").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
    /// Whether to cut an excerpt around the matches. When disabled the
    /// excerpt always starts at the beginning of the text.
    #[serde(deserialize_with = "deserialize_excerpt_flag")]
    pub excerpt: bool,
    /// Marker pattern delimiting regions removed before highlighting.
    pub ignore_between: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            max_length: DEFAULT_MAX_LENGTH,
            tag: "span".to_string(),
            css_class: Some("highlighted".to_string()),
            excerpt: true,
            ignore_between: None,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Set the maximum excerpt length.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the HTML tag for highlighting.
    pub fn tag(mut self, tag: String) -> Self {
        self.tag = tag;
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class(mut self, css_class: String) -> Self {
        self.css_class = Some(css_class);
        self
    }

    /// Render highlight tags without a class attribute.
    pub fn no_css_class(mut self) -> Self {
        self.css_class = None;
        self
    }

    /// Enable or disable excerpting.
    pub fn excerpt(mut self, excerpt: bool) -> Self {
        self.excerpt = excerpt;
        self
    }

    /// Enable or disable excerpting from its string form.
    ///
    /// See [`parse_excerpt_flag`].
    pub fn excerpt_str(mut self, value: &str) -> Self {
        self.excerpt = parse_excerpt_flag(value);
        self
    }

    /// Remove regions delimited by `marker` before highlighting.
    pub fn ignore_between(mut self, marker: String) -> Self {
        self.ignore_between = Some(marker);
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, css_class)
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Interpret the string form of the excerpt flag.
///
/// Only `"false"` (in any case, surrounding whitespace ignored) disables
/// excerpting; anything else enables it.
pub fn parse_excerpt_flag(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case("false")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExcerptFlag {
    Bool(bool),
    Text(String),
}

fn deserialize_excerpt_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ExcerptFlag::deserialize(deserializer)? {
        ExcerptFlag::Bool(flag) => flag,
        ExcerptFlag::Text(text) => parse_excerpt_flag(&text),
    })
}
