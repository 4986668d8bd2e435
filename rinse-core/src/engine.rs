// rinse-core/src/engine.rs
//! Defines the `ProfanityEngine` trait.
//!
//! The trait decouples callers (the CLI, the headless helpers, form validation
//! layers) from the concrete detector.
//!
//! License: MIT OR Apache-2.0

use crate::config::ScanOptions;
use crate::profanity_match::ProfanityMatch;

/// The query surface of a profanity detection engine.
///
/// Implementations are immutable after construction, so a single engine can be
/// shared across threads.
pub trait ProfanityEngine: Send + Sync {
    /// True iff some candidate of `text` matches a blacklist pattern and is not
    /// listed verbatim in the whitelist. Never fails; empty text is clean.
    fn has_profanity(&self, text: &str) -> bool;

    /// Returns `text` unchanged, or a string of mask characters of the same
    /// character count if `text` is profane.
    fn obfuscate_if_profane(&self, text: &str) -> String;

    /// The match that decided the scan of `text`, if any.
    ///
    /// A returned match may be whitelisted, in which case the text is clean.
    fn find_first_match(&self, text: &str) -> Option<ProfanityMatch>;

    /// The normalized words that have a compiled matcher, in scan order.
    fn blacklist(&self) -> Vec<&str>;

    /// The whitelist entries in use, in the order supplied.
    fn whitelist(&self) -> &[String];

    fn options(&self) -> &ScanOptions;
}
