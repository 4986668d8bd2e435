//! compiler.rs - Turns blacklist words into compiled, obfuscation-tolerant matchers.
//!
//! Pattern generation is a two-phase template expansion. A word is first
//! expanded into a sequence of [`PatternToken`]s (a letter class followed by a
//! separator slot for every `a..=z` letter, a literal for anything else), and
//! the sequence is then rendered once into regex source. No string replacement
//! is ever run over regex source.
//!
//! Compiled matchers are cached process-wide by normalized word, so engines
//! built from overlapping blacklists share them. The cache only holds weak
//! references: a matcher is freed once the last detector using it is dropped.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use crate::config::MAX_WORD_LENGTH;
use crate::errors::{EntryList, MalformedEntry, MalformedReason, RinseError};
use crate::patterns::fragments::{substitution_fragment, SEPARATOR_FRAGMENT};

/// Upper bound on the compiled size of a single word's regex.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// One position of an expanded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// An `a..=z` letter, rendered as its substitution fragment.
    Letter(char),
    /// Optional separator noise.
    Separator,
    /// Any other character, matched literally.
    Literal(char),
}

/// A compiled matcher for one blacklist word.
#[derive(Debug)]
pub struct CompiledMatcher {
    /// The normalized word this matcher was generated from.
    pub word: String,
    pub regex: Regex,
}

impl CompiledMatcher {
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

lazy_static! {
    /// A thread-safe, global cache of live compiled matchers keyed by normalized word.
    static ref COMPILED_MATCHER_CACHE: RwLock<HashMap<String, Weak<CompiledMatcher>>> =
        RwLock::new(HashMap::new());
}

/// Normalizes a blacklist entry: trimmed and lowercased.
///
/// Entries that cannot be turned into a single-word matcher are rejected with
/// the reason they are unusable.
pub fn normalize_word(entry: &str) -> Result<String, MalformedReason> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return Err(MalformedReason::Empty);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(MalformedReason::Phrase);
    }
    let len = trimmed.chars().count();
    if len > MAX_WORD_LENGTH {
        return Err(MalformedReason::TooLong(len));
    }
    Ok(trimmed.to_lowercase())
}

/// Phase one: expands a normalized word into pattern tokens.
pub fn expand_word(word: &str) -> Vec<PatternToken> {
    let mut tokens = Vec::with_capacity(word.len() * 2);
    for c in word.chars() {
        if c.is_ascii_lowercase() {
            tokens.push(PatternToken::Letter(c));
            tokens.push(PatternToken::Separator);
        } else {
            tokens.push(PatternToken::Literal(c));
        }
    }
    tokens
}

/// Phase two: renders a token sequence into regex source.
pub fn render_tokens(tokens: &[PatternToken]) -> String {
    let mut source = String::new();
    let mut buf = [0u8; 4];
    for token in tokens {
        match *token {
            PatternToken::Letter(c) => match substitution_fragment(c) {
                Some(fragment) => source.push_str(fragment),
                None => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
            },
            PatternToken::Separator => source.push_str(&SEPARATOR_FRAGMENT),
            PatternToken::Literal(c) => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    source
}

/// Generates and compiles the matcher for one word.
///
/// `entry` is normalized first; see [`normalize_word`].
pub fn compile_word(entry: &str) -> Result<CompiledMatcher, RinseError> {
    let word = match normalize_word(entry) {
        Ok(word) => word,
        Err(MalformedReason::TooLong(len)) => {
            return Err(RinseError::PatternLengthExceeded(entry.to_string(), len, MAX_WORD_LENGTH));
        }
        Err(reason) => {
            return Err(RinseError::MalformedWord(entry.to_string(), reason));
        }
    };

    let source = render_tokens(&expand_word(&word));
    debug!(
        target: "rinse_core::compiler",
        "Compiling matcher for a {}-char word ({} bytes of pattern).",
        word.chars().count(),
        source.len()
    );

    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| RinseError::PatternCompilation(word.clone(), e))?;

    Ok(CompiledMatcher { word, regex })
}

/// Gets a matcher from the cache or compiles it if not found.
pub fn get_or_compile_matcher(entry: &str) -> Result<Arc<CompiledMatcher>, RinseError> {
    let key = normalize_word(entry).unwrap_or_else(|_| entry.to_string());

    {
        let cache = COMPILED_MATCHER_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(matcher) = cache.get(&key).and_then(Weak::upgrade) {
            return Ok(matcher);
        }
    }

    let compiled = Arc::new(compile_word(entry)?);
    let mut cache = COMPILED_MATCHER_CACHE.write().unwrap_or_else(|e| e.into_inner());
    // Another thread may have compiled the same word in the meantime.
    if let Some(existing) = cache.get(&key).and_then(Weak::upgrade) {
        return Ok(existing);
    }
    cache.retain(|_, weak| weak.strong_count() > 0);
    cache.insert(key, Arc::downgrade(&compiled));
    Ok(compiled)
}

/// True if a live matcher for `word` is held by some detector.
pub fn is_matcher_cached(word: &str) -> bool {
    let key = normalize_word(word).unwrap_or_else(|_| word.to_string());
    COMPILED_MATCHER_CACHE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .get(&key)
        .is_some_and(|weak| weak.strong_count() > 0)
}

/// The matchers compiled from a blacklist, in blacklist order, plus the entries that were skipped.
#[derive(Debug, Default)]
pub struct CompiledBlacklist {
    pub matchers: Vec<Arc<CompiledMatcher>>,
    pub skipped: Vec<MalformedEntry>,
}

/// Compiles every usable entry of `blacklist`. Never fails as a whole.
///
/// Duplicate entries (after normalization) keep only their first position.
pub fn compile_blacklist<S: AsRef<str>>(blacklist: &[S]) -> CompiledBlacklist {
    debug!("Starting compilation of {} blacklist entries.", blacklist.len());
    let mut compiled = CompiledBlacklist::default();

    for (index, entry) in blacklist.iter().enumerate() {
        let entry = entry.as_ref();
        let skip = |reason: MalformedReason| MalformedEntry {
            list: EntryList::Blacklist,
            index,
            entry: entry.to_string(),
            reason,
        };

        let word = match normalize_word(entry) {
            Ok(word) => word,
            Err(reason) => {
                let skipped = skip(reason);
                warn!("{}", skipped);
                compiled.skipped.push(skipped);
                continue;
            }
        };

        if compiled.matchers.iter().any(|m| m.word == word) {
            debug!("Blacklist entry #{} duplicates an earlier entry; ignoring it.", index);
            continue;
        }

        match get_or_compile_matcher(&word) {
            Ok(matcher) => compiled.matchers.push(matcher),
            Err(e) => {
                let skipped = skip(MalformedReason::Compilation(e.to_string()));
                warn!("{}", skipped);
                compiled.skipped.push(skipped);
            }
        }
    }

    debug!(
        "Finished compiling blacklist. Compiled: {}, skipped: {}.",
        compiled.matchers.len(),
        compiled.skipped.len()
    );
    compiled
}
