use regex::Regex;

use super::CharFilter;
use crate::error::{GlintError, Result};

/// A char filter that removes every region delimited by a marker pattern.
///
/// Given the marker `M`, each non-overlapping match of `M.*?M` (with `.`
/// spanning newlines) is deleted in a single left-to-right pass, markers
/// included.
#[derive(Debug, Clone)]
pub struct IgnoreRegionCharFilter {
    marker: String,
    pattern: Regex,
}

impl IgnoreRegionCharFilter {
    /// Create a new ignore region filter from a marker regular expression.
    pub fn new(marker: &str) -> Result<Self> {
        if marker.is_empty() {
            return Err(GlintError::invalid_config("ignore marker must not be empty"));
        }

        let pattern = Regex::new(&format!("(?s)(?:{marker}).*?(?:{marker})")).map_err(|e| {
            GlintError::invalid_config(format!("Invalid ignore marker {marker:?}: {e}"))
        })?;

        if pattern.is_match("") {
            return Err(GlintError::invalid_config(format!(
                "Ignore marker {marker:?} must not match empty text"
            )));
        }

        Ok(IgnoreRegionCharFilter {
            marker: marker.to_string(),
            pattern,
        })
    }

    /// Get the marker pattern this filter was built from.
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl CharFilter for IgnoreRegionCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "ignore_region"
    }
}
