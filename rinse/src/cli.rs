//! This file defines the command-line interface (CLI) for the rinse application.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rinse",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and mask obfuscated profanity in text",
    long_about = "rinse checks text against a blacklist of banned words, tolerating leetspeak, look-alike characters, diacritics and punctuation inserted between letters. Whole tokens listed in the whitelist are always allowed.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging for rinse (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether the input contains profanity. Exits with status 1 if it does.
    Check(CheckCommand),

    /// Mask the input if it contains profanity.
    Obfuscate(ObfuscateCommand),
}

/// Where the input comes from and which lists apply to it.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Path to a YAML file with `blacklist` / `whitelist` keys, merged over the defaults.
    #[arg(long = "config", value_name = "FILE", env = "RINSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not load the built-in default lists.
    #[arg(long = "no-defaults")]
    pub no_defaults: bool,

    /// Extra words to ban (comma-separated).
    #[arg(long, short = 'b', value_delimiter = ',')]
    pub blacklist: Vec<String>,

    /// Extra whole tokens to allow (comma-separated).
    #[arg(long, short = 'w', value_delimiter = ',')]
    pub whitelist: Vec<String>,

    /// Apply the query to each input line separately.
    #[arg(long = "line-buffered")]
    pub line_buffered: bool,

    /// Only check single tokens; do not join spaced-out letters such as `f u c k`.
    #[arg(long = "no-join")]
    pub no_join: bool,
}

#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub lists: ListArgs,

    /// Print the deciding match as JSON instead of a plain verdict.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ObfuscateCommand {
    #[command(flatten)]
    pub lists: ListArgs,

    /// Write output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Mask character used for profane input.
    #[arg(long, short = 'm', value_name = "CHAR")]
    pub mask: Option<char>,
}
