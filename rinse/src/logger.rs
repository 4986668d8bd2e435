// rinse/src/logger.rs
//! Logger setup for the rinse binary.
//!
//! `RUST_LOG` is honoured when no override is given. An explicit level applies
//! to both the `rinse` and `rinse_core` targets.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once. Later calls are no-ops.
pub fn init_logger(level_override: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
        if let Some(level) = level_override {
            builder.filter_module("rinse", level);
            builder.filter_module("rinse_core", level);
        }
        builder.format_timestamp(None).target(env_logger::Target::Stderr);
        // A test harness may already have installed a logger.
        let _ = builder.try_init();
    });
}

/// Picks the level override from the `--quiet` / `--debug` flags.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    match (quiet, debug) {
        (true, _) => Some(LevelFilter::Off),
        (false, true) => Some(LevelFilter::Debug),
        (false, false) => None,
    }
}
