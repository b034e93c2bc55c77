//! Integration tests for the CLI command implementations.

use std::fs;

use glint::cli::args::{GlintArgs, HighlightArgs, QuickArgs};
use glint::cli::commands::{build_config, run_highlight, run_quick};
use glint::prelude::*;
use tempfile::TempDir;

fn highlight_args(query: &str, inputs: Vec<std::path::PathBuf>) -> HighlightArgs {
    HighlightArgs {
        query: query.to_string(),
        inputs,
        config: None,
        max_length: None,
        tag: None,
        css_class: None,
        no_css_class: false,
        excerpt: None,
        ignore_between: None,
        strip_quotes: false,
    }
}

#[test]
fn test_run_highlight_over_files() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.html");
    let second = temp_dir.path().join("second.txt");
    fs::write(&first, "<p>Please highlight and excerpt this text.</p>")?;
    fs::write(&second, "Nothing to see here.")?;

    let report = run_highlight(&highlight_args("highlight", vec![first.clone(), second]))?;

    assert_eq!(report.query, "highlight");
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].source, first.to_string_lossy());
    assert_eq!(
        report.results[0].snippet.text,
        "Please <span class=\"highlighted\">highlight</span> and excerpt this text."
    );
    assert_eq!(report.results[1].snippet.text, "Nothing to see here.");
    assert_eq!(report.results[1].snippet.total_matches, 0);
    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("glint.json");
    fs::write(
        &config_path,
        r###"{"max_length": 40, "tag": "mark", "excerpt": "false", "ignore_between": "##"}"###,
    )?;

    let mut args = highlight_args("acer", Vec::new());
    args.config = Some(config_path);
    args.max_length = Some(60);
    args.no_css_class = true;

    let config = build_config(&args)?;
    assert_eq!(config.max_length, 60);
    assert_eq!(config.tag, "mark");
    assert!(!config.excerpt);
    assert_eq!(config.ignore_between.as_deref(), Some("##"));
    assert!(config.css_class.is_none());

    args.excerpt = Some("true".to_string());
    assert!(build_config(&args)?.excerpt);
    Ok(())
}

#[test]
fn test_run_highlight_rejects_bad_marker() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.txt");
    fs::write(&input, "text").unwrap();

    let mut args = highlight_args("text", vec![input]);
    args.ignore_between = Some("[".to_string());
    assert!(matches!(run_highlight(&args), Err(GlintError::Config(_))));
}

#[test]
fn test_run_highlight_missing_file() {
    let args = highlight_args("text", vec!["/definitely/not/here.txt".into()]);
    assert!(matches!(run_highlight(&args), Err(GlintError::Io(_))));
}

#[test]
fn test_run_quick_with_stripped_quotes() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("list.html");
    fs::write(&input, r#"<li><a href="/red-maple">Red maple</a></li>"#)?;

    let args = QuickArgs {
        query: r#""red maple""#.to_string(),
        inputs: vec![input],
        strip_quotes: true,
    };

    let report = run_quick(&args)?;
    assert_eq!(report.query, "red maple");
    assert_eq!(
        report.results[0].text,
        r#"<li><a href="/red-maple"><b>Red</b> <b>maple</b></a></li>"#
    );
    Ok(())
}

#[test]
fn test_parsed_args_drive_commands() -> Result<()> {
    use clap::Parser;

    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.txt");
    fs::write(&input, "This is some text with a word to highlight.")?;

    let args = GlintArgs::parse_from([
        "glint".to_string(),
        "highlight".to_string(),
        "-Q".to_string(),
        "highlight".to_string(),
        "--tag".to_string(),
        "mark".to_string(),
        "--no-css-class".to_string(),
        input.to_string_lossy().to_string(),
    ]);

    let glint::cli::args::Command::Highlight(highlight) = &args.command else {
        panic!("Expected highlight command");
    };
    let report = run_highlight(highlight)?;
    assert_eq!(report.results[0].snippet.text, "...to <mark>highlight</mark>.");
    Ok(())
}
