// rinse/src/lib.rs
//! # rinse CLI
//!
//! Command-line front end for `rinse-core`: checks or masks text read from a
//! file or stdin against the default lists, a user YAML config, and words given
//! on the command line.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::check::run_check;
pub use commands::obfuscate::run_obfuscate;
