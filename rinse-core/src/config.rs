//! Configuration management for `rinse-core`.
//!
//! This module defines the blacklist/whitelist configuration consumed by the
//! detector. It handles YAML deserialization (JSON documents parse too), the
//! embedded default lists, and merging a user configuration over the defaults.
//!
//! A configuration source that is missing, unreadable or structurally invalid is
//! fatal. Individual list entries that are not strings are dropped and recorded
//! in [`ProfanityConfig::skipped`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_yml::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::errors::{EntryList, MalformedEntry, MalformedReason, RinseError};

/// Maximum number of characters in a blacklist word.
pub const MAX_WORD_LENGTH: usize = 64;

/// Query-time options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Character used by `obfuscate_if_profane`.
    pub mask_char: char,
    /// Also check runs of spaced-out letters (`f u c k`) as one candidate.
    pub join_spaced_letters: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mask_char: '*',
            join_spaced_letters: true,
        }
    }
}

/// The top-level configuration: words to ban, tokens to always allow.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfanityConfig {
    pub blacklist: Vec<String>,
    pub whitelist: Vec<String>,
    pub options: ScanOptions,
    /// Entries dropped while parsing because they were not strings.
    #[serde(skip)]
    pub skipped: Vec<MalformedEntry>,
}

/// Lenient mirror of [`ProfanityConfig`] used by the loaders, so that one
/// non-string entry does not reject the whole document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawProfanityConfig {
    blacklist: Option<Vec<Value>>,
    whitelist: Option<Vec<Value>>,
    options: ScanOptions,
}

fn textual_entries(
    values: Option<Vec<Value>>,
    list: EntryList,
    skipped: &mut Vec<MalformedEntry>,
) -> Vec<String> {
    let mut entries = Vec::new();
    for (index, value) in values.unwrap_or_default().into_iter().enumerate() {
        match value {
            Value::String(s) => entries.push(s),
            other => {
                let entry = MalformedEntry {
                    list,
                    index,
                    entry: format!("{:?}", other),
                    reason: MalformedReason::NonTextual,
                };
                warn!("{}", entry);
                skipped.push(entry);
            }
        }
    }
    entries
}

impl ProfanityConfig {
    /// Builds a configuration directly from lists.
    pub fn new<B, W>(blacklist: B, whitelist: W) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            blacklist: blacklist.into_iter().map(Into::into).collect(),
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            options: ScanOptions::default(),
            skipped: Vec::new(),
        }
    }

    /// Parses a YAML (or JSON) document. Absent keys default to empty lists.
    pub fn from_yaml_str(text: &str, source_name: &str) -> Result<Self, RinseError> {
        if text.trim().is_empty() {
            debug!("Configuration '{}' is empty; using empty lists.", source_name);
            return Ok(Self::default());
        }
        let raw: RawProfanityConfig = serde_yml::from_str(text)
            .map_err(|e| RinseError::ConfigParse(source_name.to_string(), e.to_string()))?;

        let mut skipped = Vec::new();
        let blacklist = textual_entries(raw.blacklist, EntryList::Blacklist, &mut skipped);
        let whitelist = textual_entries(raw.whitelist, EntryList::Whitelist, &mut skipped);

        Ok(Self {
            blacklist,
            whitelist,
            options: raw.options,
            skipped,
        })
    }

    /// Loads lists from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading profanity lists from: {}", path.display());
        if !path.exists() {
            return Err(RinseError::ConfigNotFound(path.to_path_buf()).into());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| RinseError::ConfigRead(path.to_path_buf(), e))?;
        let config = Self::from_yaml_str(&text, &path.display().to_string())
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        info!(
            "Loaded {} blacklist and {} whitelist entries from {}.",
            config.blacklist.len(),
            config.whitelist.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the default lists embedded in the library.
    pub fn load_default_lists() -> Result<Self> {
        debug!("Loading default lists from embedded string...");
        let default_yaml = include_str!("../config/profanity.yaml");
        let config = Self::from_yaml_str(default_yaml, "embedded defaults")
            .context("Failed to parse default lists")?;

        debug!("Loaded {} default blacklist entries.", config.blacklist.len());
        Ok(config)
    }
}

fn union_in_order(base: Vec<String>, extra: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(base.len() + extra.len());
    base.into_iter()
        .chain(extra)
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// Merges a user configuration over the defaults.
///
/// Lists are unions that keep first-seen order (defaults first). User options
/// replace the default options.
pub fn merge_lists(default_config: ProfanityConfig, user_config: Option<ProfanityConfig>) -> ProfanityConfig {
    debug!(
        "merge_lists called. Default blacklist: {}, whitelist: {}.",
        default_config.blacklist.len(),
        default_config.whitelist.len()
    );

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    let mut skipped = default_config.skipped;
    skipped.extend(user_cfg.skipped);

    let merged = ProfanityConfig {
        blacklist: union_in_order(default_config.blacklist, user_cfg.blacklist),
        whitelist: union_in_order(default_config.whitelist, user_cfg.whitelist),
        options: user_cfg.options,
        skipped,
    };
    debug!(
        "Final lists after merge. Blacklist: {}, whitelist: {}.",
        merged.blacklist.len(),
        merged.whitelist.len()
    );
    merged
}
