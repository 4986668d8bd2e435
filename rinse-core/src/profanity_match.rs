// rinse-core/src/profanity_match.rs
//! The record of a deciding match, and log helpers that keep matched text out of
//! debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Read once: whether matched tokens may appear verbatim in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("RINSE_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The candidate/word pair that decided a scan.
///
/// `start` and `end` are byte offsets of `token` within the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfanityMatch {
    /// The candidate text exactly as it appears in the input.
    pub token: String,
    /// The normalized blacklist word whose pattern matched.
    pub word: String,
    pub start: usize,
    pub end: usize,
    /// True if `token` is listed verbatim in the whitelist, which makes the scan clean.
    pub whitelisted: bool,
}

impl ProfanityMatch {
    /// True if this match makes the scanned text profane.
    pub fn is_profane(&self) -> bool {
        !self.whitelisted
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_profanity_match_debug(module_path: &str, m: &ProfanityMatch) {
    debug!(
        "{} Token {}..{} '{}' matched word '{}' (whitelisted: {})",
        module_path,
        m.start,
        m.end,
        get_loggable_content(&m.token),
        get_loggable_content(&m.word),
        m.whitelisted
    );
}
