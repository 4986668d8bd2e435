// rinse-core/src/lib.rs
//! # rinse Core Library
//!
//! `rinse-core` detects banned words in user-submitted text while tolerating the
//! usual obfuscation tricks: leetspeak, look-alike characters, diacritics and
//! punctuation inserted between letters (`f.u.c.k`, `fu(_)ck`, `5h1t`).
//!
//! Each blacklist word is expanded into a regular expression in which every
//! letter may be replaced by any of its registered substitutes and followed by
//! separator noise. Input text is scanned token by token; the first token that
//! matches decides the result, unless it is listed verbatim in the whitelist.
//!
//! ## Modules
//!
//! * `tables`: The fixed separator set and substitution table.
//! * `patterns`: Fragment builders and the per-word pattern compiler.
//! * `tokens`: Splitting input into the candidates that are checked.
//! * `engine`: The `ProfanityEngine` trait.
//! * `detector`: The regex-backed `ProfanityDetector`.
//! * `config`: Blacklist/whitelist configuration, loading and merging.
//! * `profanity_match`: The deciding match record and PII-safe log helpers.
//! * `headless`: One-shot helpers.
//! * `errors`: Fatal errors and per-entry diagnostics.
//!
//! ## Usage Example
//!
//! ```rust
//! use rinse_core::{ProfanityDetector, ProfanityEngine};
//!
//! let detector = ProfanityDetector::new(&["fuck"], &["Duck"]);
//!
//! assert!(!detector.has_profanity("have a nice day"));
//! assert!(detector.has_profanity("fu(_)ck off"));
//! assert!(detector.has_profanity("f u c k you"));
//! assert_eq!(detector.obfuscate_if_profane("f4ck"), "****");
//! ```
//!
//! ## Error Handling
//!
//! Loading a configuration can fail with [`RinseError`]. Building a detector from
//! lists never fails: unusable entries are skipped and reported through
//! [`ProfanityDetector::diagnostics`]. Queries always return a value.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod detector;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod patterns;
pub mod profanity_match;
pub mod tables;
pub mod tokens;

/// Re-exports the configuration types and functions.
pub use config::{merge_lists, ProfanityConfig, ScanOptions, MAX_WORD_LENGTH};

/// Re-exports the error and diagnostic types.
pub use errors::{EntryList, MalformedEntry, MalformedReason, RinseError};

/// Re-exports the engine trait and its implementation.
pub use detector::ProfanityDetector;
pub use engine::ProfanityEngine;

pub use profanity_match::ProfanityMatch;

pub use headless::{headless_has_profanity, headless_obfuscate_string};

pub use patterns::compiler::{
    compile_blacklist, compile_word, is_matcher_cached, CompiledBlacklist, CompiledMatcher,
};
