//! Subcommand implementations and the input/config plumbing they share.

pub mod check;
pub mod obfuscate;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Read};

use rinse_core::config::{merge_lists, ProfanityConfig};
use rinse_core::{ProfanityDetector, ProfanityEngine};

use crate::cli::ListArgs;

/// Resolves the lists for a run: defaults, then `--config`, then `--blacklist`/`--whitelist`.
pub fn resolve_config(args: &ListArgs) -> Result<ProfanityConfig> {
    let base = if args.no_defaults {
        debug!("Default lists disabled.");
        ProfanityConfig::default()
    } else {
        ProfanityConfig::load_default_lists()?
    };

    let user = match &args.config {
        Some(path) => Some(
            ProfanityConfig::load_from_file(path)
                .with_context(|| format!("Failed to load lists from {}", path.display()))?,
        ),
        None => None,
    };

    let mut config = merge_lists(base, user);
    config.blacklist.extend(args.blacklist.iter().cloned());
    config.whitelist.extend(args.whitelist.iter().cloned());
    if args.no_join {
        config.options.join_spaced_letters = false;
    }
    Ok(config)
}

/// Builds the engine for a run and reports skipped entries.
pub fn build_detector(config: &ProfanityConfig) -> Box<dyn ProfanityEngine> {
    let detector = ProfanityDetector::from_config(config);
    for skipped in detector.diagnostics() {
        warn!("{}", skipped);
    }
    info!(
        "Detector ready: {} blacklist words, {} whitelist entries.",
        config.blacklist.len(),
        config.whitelist.len()
    );
    Box::new(detector)
}

/// Reads the whole input from `--input-file` or stdin.
pub fn read_input(args: &ListArgs) -> Result<String> {
    match &args.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// The units a run is applied to: each line, or the whole input without its final newline.
pub fn input_units(input: &str, line_buffered: bool) -> Vec<&str> {
    if line_buffered {
        input.lines().collect()
    } else {
        let trimmed = input
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(input);
        vec![trimmed]
    }
}
