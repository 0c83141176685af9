//! # lintwalk
//!
//! A CLI tool that lists the candidate files a lint run would visit.
//!
//! ## Overview
//!
//! lintwalk is built on top of lintwalklib and answers the question
//! "which files would my linter actually check here?" — useful when
//! debugging exclude rules that prune too much or too little.
//!
//! ## Usage
//!
//! ```bash
//! # List candidates under the current directory
//! lintwalk
//!
//! # Exclude version-control metadata and build output
//! lintwalk src --exclude ".git,build,*.egg-info"
//!
//! # Only Python files
//! lintwalk src --filename "*.py"
//!
//! # Machine-readable output
//! lintwalk src --output json
//!
//! # '-' marks piped input; it is passed through for the linter to read
//! lintwalk - setup.py
//! ```
//!
//! Exclude patterns apply to bare names and to normalized paths, so both
//! `".git"` and `"./vendored/*"` work. Explicitly named files bypass the
//! `--filename` filter: naming a file on the command line means you want
//! it listed.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use lintwalklib::{
    fnmatch, is_using_stdin, normalize_path_cwd, parse_comma_separated_list, walk_files,
    LintwalkError, PatternSet, STDIN_MARKER,
};
use serde::Serialize;

/// Everything a single run reports.
#[derive(Debug, Serialize)]
struct FileReport {
    files: Vec<String>,
    count: usize,
    uses_stdin: bool,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("lintwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List the candidate files a lint run would visit, honoring exclusion rules")
        .arg(
            Arg::new("paths")
                .help("Files or directories to enumerate; '-' means stdin (defaults to '.')")
                .action(ArgAction::Append)
                .default_value("."),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Comma-separated glob patterns for files and directories to skip"),
        )
        .arg(
            Arg::new("filename")
                .short('f')
                .long("filename")
                .action(ArgAction::Append)
                .help("Comma-separated glob patterns a filename must match to be listed"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Collect a repeatable, comma-separated pattern flag into one flat list.
fn collect_patterns(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .into_iter()
        .flatten()
        .flat_map(|value| parse_comma_separated_list(value))
        .collect()
}

/// Enumerate candidate files for every path argument.
///
/// Directory arguments are walked with the exclude set applied to both
/// bare names and normalized paths; surviving files must also match the
/// filename patterns (everything matches when none are given). File
/// arguments and the stdin marker are passed through untouched.
fn enumerate_files(
    paths: &[String],
    excludes: &PatternSet,
    filenames: &[String],
) -> anyhow::Result<Vec<String>> {
    let mut files = Vec::new();

    for arg in paths {
        if arg == STDIN_MARKER {
            files.push(STDIN_MARKER.to_string());
            continue;
        }

        let root = Path::new(arg);
        if !root.exists() {
            return Err(LintwalkError::PathNotFound(root.to_path_buf()).into());
        }

        if !root.is_dir() {
            files.push(arg.clone());
            continue;
        }

        let predicate = |candidate: &str| {
            if excludes.is_empty() {
                return false;
            }
            excludes.matches(&normalize_path_cwd(candidate), false)
        };

        for path in walk_files(root, predicate) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if fnmatch(&name, filenames, true) {
                files.push(path.to_string_lossy().into_owned());
            }
        }
    }

    Ok(files)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    // Exclude patterns are normalized the same way candidates are, so a
    // relative path pattern and its walked counterpart line up.
    let exclude_patterns: Vec<String> = collect_patterns(matches, "exclude")
        .iter()
        .map(|p| normalize_path_cwd(p))
        .collect();
    let excludes =
        PatternSet::new(&exclude_patterns).context("invalid --exclude pattern")?;
    let filenames = collect_patterns(matches, "filename");

    let files = enumerate_files(&paths, &excludes, &filenames)?;
    let report = FileReport {
        count: files.len(),
        uses_stdin: is_using_stdin(&paths),
        files,
    };

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("text");

    if output == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for file in &report.files {
        println!("{file}");
    }
    let noun = if report.count == 1 { "file" } else { "files" };
    eprintln!(
        "{}",
        style(format!("{} candidate {}", report.count, noun)).dim()
    );
    if report.uses_stdin {
        eprintln!("{}", style("reading from stdin (-)").dim());
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
