// File: rinse-core/src/headless.rs

//! Convenience wrappers for one-shot, non-interactive use.
//!
//! Each helper builds a detector from the given configuration and runs a single
//! query. Callers that check more than one string should build a
//! [`ProfanityDetector`] once and reuse it.

use crate::config::ProfanityConfig;
use crate::detector::ProfanityDetector;
use crate::engine::ProfanityEngine;

/// Checks `content` against `config` in a single call.
pub fn headless_has_profanity(config: &ProfanityConfig, content: &str) -> bool {
    ProfanityDetector::from_config(config).has_profanity(content)
}

/// Obfuscates `content` if it is profane under `config`.
pub fn headless_obfuscate_string(config: &ProfanityConfig, content: &str) -> String {
    ProfanityDetector::from_config(config).obfuscate_if_profane(content)
}
