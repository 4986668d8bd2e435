//! errors.rs - Custom error types for the rinse-core library.
//!
//! Configuration problems are fatal and surface as [`RinseError`]. Problems with a
//! single list entry are not errors at all: they become [`MalformedEntry`]
//! diagnostics, the entry is skipped and the engine is built from the rest.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// All fatal error types in the `rinse-core` library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RinseError {
    #[error("Configuration file '{}' not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read configuration file '{}': {}", .0.display(), .1)]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse configuration '{0}': {1}")]
    ConfigParse(String, String),

    #[error("Failed to compile pattern for word '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Word '{0}' cannot be compiled: {1}")]
    MalformedWord(String, MalformedReason),

    #[error("Word '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),
}

/// Which caller-supplied list an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryList {
    Blacklist,
    Whitelist,
}

impl fmt::Display for EntryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryList::Blacklist => write!(f, "blacklist"),
            EntryList::Whitelist => write!(f, "whitelist"),
        }
    }
}

/// Why an entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Empty, or whitespace only.
    Empty,
    /// Not a string in the source configuration (number, null, map...).
    NonTextual,
    /// Contains inner whitespace; only single words are matched.
    Phrase,
    /// Longer than [`crate::MAX_WORD_LENGTH`] characters.
    TooLong(usize),
    /// The generated pattern was rejected by the regex compiler.
    Compilation(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => write!(f, "entry is empty"),
            MalformedReason::NonTextual => write!(f, "entry is not a string"),
            MalformedReason::Phrase => write!(f, "entry contains whitespace"),
            MalformedReason::TooLong(len) => write!(f, "entry is too long ({} chars)", len),
            MalformedReason::Compilation(e) => write!(f, "pattern failed to compile: {}", e),
        }
    }
}

/// A skipped blacklist or whitelist entry, reported through the detector's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    pub list: EntryList,
    /// Position of the entry in the list as supplied.
    pub index: usize,
    pub entry: String,
    pub reason: MalformedReason,
}

impl fmt::Display for MalformedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entry #{} skipped: {}", self.list, self.index, self.reason)
    }
}
