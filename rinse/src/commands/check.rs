//! `rinse check`: report whether the input is profane.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use rinse_core::ProfanityEngine;

use crate::cli::CheckCommand;
use crate::commands::{build_detector, input_units, read_input, resolve_config};

/// Runs the check and returns true if any unit of the input is profane.
pub fn run_check(cmd: &CheckCommand) -> Result<bool> {
    let config = resolve_config(&cmd.lists)?;
    let detector: Box<dyn ProfanityEngine> = build_detector(&config);
    let input = read_input(&cmd.lists)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let color = stdout.is_terminal() && !cmd.json;
    let mut any_profane = false;

    for unit in input_units(&input, cmd.lists.line_buffered) {
        let found = detector.find_first_match(unit);
        let profane = found.as_ref().is_some_and(|m| m.is_profane());
        any_profane |= profane;
        debug!("Checked {} chars: profane = {}", unit.chars().count(), profane);

        if cmd.json {
            let line = serde_json::to_string(&found).context("Failed to serialize match")?;
            writeln!(writer, "{}", line)?;
        } else {
            write_verdict(&mut writer, profane, color)?;
        }
    }

    Ok(any_profane)
}

fn write_verdict<W: Write>(writer: &mut W, profane: bool, color: bool) -> io::Result<()> {
    match (profane, color) {
        (true, true) => writeln!(writer, "{}", "profane".red().bold()),
        (false, true) => writeln!(writer, "{}", "clean".green()),
        (true, false) => writeln!(writer, "profane"),
        (false, false) => writeln!(writer, "clean"),
    }
}
