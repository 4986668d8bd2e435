//! fragments.rs - Reusable regex fragments derived from the fixed tables.
//!
//! Two kinds of fragments are built here, once per process:
//!
//! * the separator fragment, "zero or more noise characters, lazy", bridging the
//!   letters of a spaced-out word such as `f.u.c.k`;
//! * one substitution fragment per letter, "the letter or any of its
//!   substitutes, one or more, lazy".
//!
//! Fragments are rendered regex source. Every literal character goes through
//! [`regex::escape`], so no table entry is ever interpreted as syntax.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;

use crate::tables::{ESCAPED_SEPARATOR_CLASSES, SEPARATOR_CHARACTERS, SUBSTITUTIONS};

/// Repetition applied to a character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `*?`
    ZeroOrMoreLazy,
    /// `+?`
    OneOrMoreLazy,
}

impl Quantifier {
    fn as_str(self) -> &'static str {
        match self {
            Quantifier::ZeroOrMoreLazy => "*?",
            Quantifier::OneOrMoreLazy => "+?",
        }
    }
}

/// Renders a bracketed character class from pre-escaped classes and literal characters.
pub fn character_class(characters: &[char], escaped: &[&str], quantifier: Quantifier) -> String {
    let mut class = String::from("[");
    for raw in escaped {
        class.push_str(raw);
    }
    let mut buf = [0u8; 4];
    for c in characters {
        class.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }
    class.push(']');
    class.push_str(quantifier.as_str());
    class
}

/// Builds the separator fragment from the fixed separator set.
pub fn build_separator_fragment() -> String {
    character_class(SEPARATOR_CHARACTERS, ESCAPED_SEPARATOR_CLASSES, Quantifier::ZeroOrMoreLazy)
}

/// Builds the 26 substitution fragments, indexed by `letter - 'a'`.
///
/// The separator slot that follows each letter is not part of the fragment; the
/// compiler inserts it as its own token when expanding a word.
pub fn build_substitution_fragments() -> Vec<String> {
    SUBSTITUTIONS
        .iter()
        .map(|(_, substitutes)| character_class(substitutes, &[], Quantifier::OneOrMoreLazy))
        .collect()
}

lazy_static! {
    /// The compiled-once separator fragment.
    pub static ref SEPARATOR_FRAGMENT: String = build_separator_fragment();

    /// The compiled-once substitution fragments.
    pub static ref SUBSTITUTION_FRAGMENTS: Vec<String> = build_substitution_fragments();
}

/// Returns the substitution fragment for `letter`, or `None` outside `a..=z`.
pub fn substitution_fragment(letter: char) -> Option<&'static str> {
    if !letter.is_ascii_lowercase() {
        return None;
    }
    SUBSTITUTION_FRAGMENTS
        .get((letter as u8 - b'a') as usize)
        .map(String::as_str)
}
