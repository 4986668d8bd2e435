// rinse/src/main.rs
//! rinse entry point.
//!
//! Exit status: 0 clean, 1 profane (`check` only), 2 on any error.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use rinse::cli::{Cli, Commands};
use rinse::logger;
use rinse::{run_check, run_obfuscate};

const EXIT_PROFANE: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: &Cli) -> Result<ExitCode> {
    match &args.command {
        Commands::Check(cmd) => {
            let profane = run_check(cmd)?;
            Ok(if profane { ExitCode::from(EXIT_PROFANE) } else { ExitCode::SUCCESS })
        }
        Commands::Obfuscate(cmd) => {
            run_obfuscate(cmd)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
