//! `rinse obfuscate`: mask profane input.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};

use rinse_core::ProfanityEngine;

use crate::cli::ObfuscateCommand;
use crate::commands::{build_detector, input_units, read_input, resolve_config};

pub fn run_obfuscate(cmd: &ObfuscateCommand) -> Result<()> {
    let mut config = resolve_config(&cmd.lists)?;
    if let Some(mask) = cmd.mask {
        config.options.mask_char = mask;
    }
    let detector: Box<dyn ProfanityEngine> = build_detector(&config);
    let input = read_input(&cmd.lists)?;

    let output: Vec<String> = input_units(&input, cmd.lists.line_buffered)
        .into_iter()
        .map(|unit| detector.obfuscate_if_profane(unit))
        .collect();

    match &cmd.output {
        Some(path) => {
            info!("Writing obfuscated content to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_units(&mut file, &output)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_units(&mut writer, &output)?;
        }
    }
    Ok(())
}

fn write_units<W: Write>(writer: &mut W, units: &[String]) -> io::Result<()> {
    for unit in units {
        writeln!(writer, "{}", unit)?;
    }
    writer.flush()
}
