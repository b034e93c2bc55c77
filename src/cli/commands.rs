//! Command implementations for Glint CLI.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::highlight::{
    HighlightConfig, InlineHighlighter, SnippetHighlighter, parse_excerpt_flag, strip_quotes,
};

/// Name used for input read from stdin.
const STDIN_SOURCE: &str = "-";

/// Execute a CLI command.
pub fn execute_command(args: GlintArgs) -> Result<()> {
    match &args.command {
        Command::Highlight(highlight_args) => {
            let report = run_highlight(highlight_args)?;
            output_result("Highlighted excerpts", &report, &args)
        }
        Command::Quick(quick_args) => {
            let report = run_quick(quick_args)?;
            output_result("Highlighted text", &report, &args)
        }
    }
}

/// Build the highlighter configuration: the config file (if any) overridden
/// by command line flags.
pub fn build_config(args: &HighlightArgs) -> Result<HighlightConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            HighlightConfig::from_json_file(path)?
        }
        None => HighlightConfig::default(),
    };

    if let Some(max_length) = args.max_length {
        config = config.max_length(max_length);
    }
    if let Some(tag) = &args.tag {
        config = config.tag(tag.clone());
    }
    if let Some(css_class) = &args.css_class {
        config = config.css_class(css_class.clone());
    }
    if args.no_css_class {
        config = config.no_css_class();
    }
    if let Some(excerpt) = &args.excerpt {
        config = config.excerpt(parse_excerpt_flag(excerpt));
    }
    if let Some(marker) = &args.ignore_between {
        config = config.ignore_between(marker.clone());
    }

    Ok(config)
}

/// Cut a highlighted excerpt out of every input.
pub fn run_highlight(args: &HighlightArgs) -> Result<HighlightReport> {
    let start_time = Instant::now();
    let query = effective_query(&args.query, args.strip_quotes);
    let highlighter = SnippetHighlighter::new(&query, build_config(args)?)?;

    let inputs = read_inputs(&args.inputs)?;
    let results = inputs
        .par_iter()
        .map(|(source, text)| SnippetResult {
            source: source.clone(),
            snippet: highlighter.highlight_detailed(text),
        })
        .collect();

    Ok(HighlightReport {
        query,
        results,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Bold every query word in every input.
pub fn run_quick(args: &QuickArgs) -> Result<QuickReport> {
    let start_time = Instant::now();
    let query = effective_query(&args.query, args.strip_quotes);
    let highlighter = InlineHighlighter::new(&query)?;

    let results = read_inputs(&args.inputs)?
        .into_iter()
        .map(|(source, text)| QuickResult {
            text: highlighter.highlight(&text),
            source,
        })
        .collect();

    Ok(QuickReport {
        query,
        results,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

fn effective_query(raw: &str, remove_quotes: bool) -> String {
    if remove_quotes {
        strip_quotes(raw)
    } else {
        raw.to_string()
    }
}

/// Read every input file, or stdin when no files are given.
fn read_inputs(paths: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if paths.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(vec![(STDIN_SOURCE.to_string(), text)]);
    }

    paths
        .iter()
        .map(|path| -> Result<(String, String)> {
            info!("Reading input: {}", path.display());
            Ok((path.to_string_lossy().to_string(), fs::read_to_string(path)?))
        })
        .collect()
}
