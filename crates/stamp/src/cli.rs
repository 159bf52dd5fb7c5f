//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use stamp_map::DEFAULT_SEPARATOR;

/// Render a template with data from a key/value map file.
///
/// By default the output is written next to the current directory as
/// `<template name>.html`. Use `--stdout` to print it or `--httpd` to start a
/// preview server that re-renders the template on every request.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "stamp", version)]
#[command(after_help = "Map file lines look like `key·value` or `key·first·second·third`.\n\
    Lines that are too short or lack the separator are ignored.")]
pub struct Cli {
    /// Path to the main template
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path to an inner template rendered inside the main one
    #[arg(short, long, value_name = "FILE")]
    pub inner: Option<PathBuf>,

    /// Path to the key/value map file
    #[arg(short, long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Separator between keys and values in the map file
    #[arg(
        short,
        long,
        value_name = "CHAR",
        env = "STAMP_SEPARATOR",
        default_value = DEFAULT_SEPARATOR
    )]
    pub separator: String,

    /// Add an entry in map-file syntax, applied after the map file
    #[arg(long = "set", value_name = "ENTRY")]
    pub set: Vec<String>,

    /// Print to stdout
    #[arg(short = 'p', long, conflicts_with = "httpd")]
    pub stdout: bool,

    /// Write to a custom file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Start a temporary preview webserver
    #[arg(short = 'w', long)]
    pub httpd: bool,

    /// Directory served under /include/ by the webserver [default: current directory]
    #[arg(short = 'r', long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Fail when a template uses an undefined value
    #[arg(long)]
    pub strict: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Exit status for a failed argument parse.
///
/// Help and version requests are not failures and exit with 0; every real
/// usage error exits with 1.
pub fn clap_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
