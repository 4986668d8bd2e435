//! The `ProfanityEngine` implementation backed by compiled per-word regexes.
//!
//! A detector is built once from a blacklist and a whitelist. Construction
//! compiles one matcher per usable blacklist word and records every skipped
//! entry as a diagnostic; it never fails. Queries are read-only.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};

use crate::config::{ProfanityConfig, ScanOptions};
use crate::engine::ProfanityEngine;
use crate::errors::{EntryList, MalformedEntry, MalformedReason};
use crate::patterns::compiler::{compile_blacklist, CompiledMatcher};
use crate::profanity_match::{log_profanity_match_debug, ProfanityMatch};
use crate::tokens::{candidates, split_tokens, Candidate};

#[derive(Debug)]
pub struct ProfanityDetector {
    matchers: Vec<Arc<CompiledMatcher>>,
    whitelist: Vec<String>,
    whitelist_set: HashSet<String>,
    options: ScanOptions,
    diagnostics: Vec<MalformedEntry>,
}

impl ProfanityDetector {
    pub fn new<S: AsRef<str>>(blacklist: &[S], whitelist: &[S]) -> Self {
        Self::with_options(blacklist, whitelist, ScanOptions::default())
    }

    pub fn with_options<B, W>(blacklist: &[B], whitelist: &[W], options: ScanOptions) -> Self
    where
        B: AsRef<str>,
        W: AsRef<str>,
    {
        let compiled = compile_blacklist(blacklist);
        let mut diagnostics = compiled.skipped;

        let mut kept = Vec::with_capacity(whitelist.len());
        for (index, entry) in whitelist.iter().enumerate() {
            let entry = entry.as_ref();
            if entry.is_empty() {
                let skipped = MalformedEntry {
                    list: EntryList::Whitelist,
                    index,
                    entry: String::new(),
                    reason: MalformedReason::Empty,
                };
                warn!("{}", skipped);
                diagnostics.push(skipped);
                continue;
            }
            kept.push(entry.to_string());
        }
        let whitelist_set = kept.iter().cloned().collect();

        debug!(
            "ProfanityDetector built with {} matchers, {} whitelist entries, {} skipped entries.",
            compiled.matchers.len(),
            kept.len(),
            diagnostics.len()
        );

        Self {
            matchers: compiled.matchers,
            whitelist: kept,
            whitelist_set,
            options,
            diagnostics,
        }
    }

    /// Builds a detector from a loaded configuration, carrying over the entries
    /// the loader already dropped.
    pub fn from_config(config: &ProfanityConfig) -> Self {
        let mut detector = Self::with_options(&config.blacklist, &config.whitelist, config.options.clone());
        if !config.skipped.is_empty() {
            let mut diagnostics = config.skipped.clone();
            diagnostics.append(&mut detector.diagnostics);
            detector.diagnostics = diagnostics;
        }
        detector
    }

    /// Loads a YAML configuration file and builds a detector from it.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = ProfanityConfig::load_from_file(path)?;
        Ok(Self::from_config(&config))
    }

    /// Entries skipped while building this detector.
    pub fn diagnostics(&self) -> &[MalformedEntry] {
        &self.diagnostics
    }

    /// Whitelist check for a matched candidate.
    ///
    /// A plain token must equal a whitelist entry. A joined run of spaced
    /// letters is also whitelisted when some contiguous sub-run covering the
    /// match spells a whitelist entry once its whitespace is removed
    /// (`a c o c k t a i l` against `cocktail`).
    fn is_whitelisted(&self, candidate: &Candidate<'_>, matcher: &CompiledMatcher) -> bool {
        if self.whitelist_set.contains(candidate.text) {
            return true;
        }
        if !candidate.joined {
            return false;
        }
        let Some(found) = matcher.regex.find(candidate.text) else {
            return false;
        };

        let letters = split_tokens(candidate.text);
        for (i, first) in letters.iter().enumerate() {
            if first.start > found.start() {
                break;
            }
            let mut spelled = String::new();
            for letter in &letters[i..] {
                spelled.push_str(letter.text);
                if letter.end >= found.end() && self.whitelist_set.contains(spelled.as_str()) {
                    return true;
                }
            }
        }
        false
    }

    fn mask(&self, text: &str) -> String {
        std::iter::repeat(self.options.mask_char)
            .take(text.chars().count())
            .collect()
    }
}

impl ProfanityEngine for ProfanityDetector {
    fn has_profanity(&self, text: &str) -> bool {
        self.find_first_match(text)
            .map_or(false, |m| m.is_profane())
    }

    fn obfuscate_if_profane(&self, text: &str) -> String {
        if self.has_profanity(text) {
            self.mask(text)
        } else {
            text.to_string()
        }
    }

    fn find_first_match(&self, text: &str) -> Option<ProfanityMatch> {
        if text.is_empty() || self.matchers.is_empty() {
            return None;
        }

        for candidate in candidates(text, self.options.join_spaced_letters) {
            if let Some(matcher) = self.matchers.iter().find(|m| m.is_match(candidate.text)) {
                let found = ProfanityMatch {
                    token: candidate.text.to_string(),
                    word: matcher.word.clone(),
                    start: candidate.start,
                    end: candidate.end,
                    whitelisted: self.is_whitelisted(&candidate, matcher),
                };
                log_profanity_match_debug(module_path!(), &found);
                // The first match decides, whitelisted or not.
                return Some(found);
            }
        }
        None
    }

    fn blacklist(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.word.as_str()).collect()
    }

    fn whitelist(&self) -> &[String] {
        &self.whitelist
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }
}
