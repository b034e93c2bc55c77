//! Command line argument parsing for Glint CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Glint - query-aware excerpting and highlighting of search results
#[derive(Parser, Debug, Clone)]
#[command(name = "glint")]
#[command(about = "Query-aware excerpting and highlighting of search results")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlintArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlintArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Cut a highlighted excerpt out of each input
    Highlight(HighlightArgs),

    /// Bold every query word in each input, leaving markup untouched
    Quick(QuickArgs),
}

/// Arguments for snippet highlighting
#[derive(Parser, Debug, Clone)]
pub struct HighlightArgs {
    /// Query string
    #[arg(short = 'Q', long)]
    pub query: String,

    /// Input files (reads stdin when none are given)
    #[arg(value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Configuration file (JSON); flags below override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum excerpt length in characters
    #[arg(short = 'n', long)]
    pub max_length: Option<usize>,

    /// HTML tag wrapped around matches
    #[arg(long)]
    pub tag: Option<String>,

    /// CSS class of the highlight tag
    #[arg(long)]
    pub css_class: Option<String>,

    /// Render highlight tags without a class attribute
    #[arg(long, conflicts_with = "css_class")]
    pub no_css_class: bool,

    /// Excerpt around matches ("false" disables)
    #[arg(long, value_name = "BOOL")]
    pub excerpt: Option<String>,

    /// Marker pattern delimiting regions to drop before highlighting
    #[arg(long, value_name = "MARKER")]
    pub ignore_between: Option<String>,

    /// Remove double quotes from the query first
    #[arg(long)]
    pub strip_quotes: bool,
}

/// Arguments for inline highlighting
#[derive(Parser, Debug, Clone)]
pub struct QuickArgs {
    /// Query string
    #[arg(short = 'Q', long)]
    pub query: String,

    /// Input files (reads stdin when none are given)
    #[arg(value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Remove double quotes from the query first
    #[arg(long)]
    pub strip_quotes: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
