//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GlintArgs, OutputFormat};
use crate::error::Result;
use crate::highlight::HighlightedSnippet;

/// Snippet produced for one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetResult {
    pub source: String,
    #[serde(flatten)]
    pub snippet: HighlightedSnippet,
}

/// Result structure for the highlight command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightReport {
    pub query: String,
    pub results: Vec<SnippetResult>,
    pub duration_ms: u64,
}

/// Inline-highlighted text produced for one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickResult {
    pub source: String,
    pub text: String,
}

/// Result structure for the quick command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickReport {
    pub query: String,
    pub results: Vec<QuickResult>,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &GlintArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &GlintArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;
    let results = value
        .get("results")
        .and_then(|r| r.as_array())
        .cloned()
        .unwrap_or_default();
    let show_source = results.len() > 1 || args.verbosity() > 1;

    for item in &results {
        if show_source && let Some(source) = item.get("source").and_then(|s| s.as_str()) {
            println!("── {source}");
        }

        if let Some(text) = item.get("text").and_then(|t| t.as_str()) {
            println!("{text}");
        }

        if args.verbosity() > 2 {
            let start = item.get("start").and_then(|s| s.as_u64());
            let end = item.get("end").and_then(|e| e.as_u64());
            let shown = item.get("matches_in_window").and_then(|m| m.as_u64());
            let total = item.get("total_matches").and_then(|m| m.as_u64());
            if let (Some(start), Some(end), Some(shown), Some(total)) = (start, end, shown, total) {
                println!("   window {start}..{end}, {shown} of {total} matches shown");
            }
        }
    }

    if args.verbosity() > 1
        && let Some(duration) = value.get("duration_ms").and_then(|d| d.as_u64())
    {
        println!();
        println!("Time: {duration}ms");
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GlintArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_result_serializes_flat() {
        let result = SnippetResult {
            source: "doc.txt".to_string(),
            snippet: HighlightedSnippet {
                text: "...to <b>x</b>".to_string(),
                start: 3,
                end: 9,
                matches_in_window: 1,
                total_matches: 2,
                text_length: 20,
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["source"], "doc.txt");
        assert_eq!(value["text"], "...to <b>x</b>");
        assert_eq!(value["start"], 3);
        assert_eq!(value["total_matches"], 2);
    }
}
