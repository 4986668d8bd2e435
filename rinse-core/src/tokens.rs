//! Splits input text into the candidates the detector checks.
//!
//! A candidate is either a whitespace-delimited token (punctuation stays
//! attached) or, optionally, a run of spaced-out letters such as `f u c k`
//! taken as one slice of the input.

use crate::tables::is_separator;

/// A slice of the input to be checked against every matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    /// Byte offset of `text` in the input.
    pub start: usize,
    pub end: usize,
    /// True for a combined run of spaced letter tokens.
    pub joined: bool,
}

/// Whitespace-delimited tokens of `text`, with byte offsets.
pub fn split_tokens(text: &str) -> Vec<Candidate<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Candidate { text: &text[s..i], start: s, end: i, joined: false });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Candidate { text: &text[s..], start: s, end: text.len(), joined: false });
    }
    tokens
}

/// A token that carries at most one non-separator character (`f`, `u.`, `(_)`).
pub fn is_spaced_letter(token: &str) -> bool {
    token.chars().filter(|c| !is_separator(*c)).count() <= 1
}

/// Every candidate of `text` in scan order.
///
/// With `join_spaced_letters`, a run of two or more spaced letter tokens is
/// emitted as one extra candidate right before the run's first token.
pub fn candidates(text: &str, join_spaced_letters: bool) -> Vec<Candidate<'_>> {
    let tokens = split_tokens(text);
    if !join_spaced_letters {
        return tokens;
    }

    let mut out = Vec::with_capacity(tokens.len());
    let mut run_end = 0;
    for i in 0..tokens.len() {
        if i >= run_end && is_spaced_letter(tokens[i].text) {
            let mut j = i;
            while j < tokens.len() && is_spaced_letter(tokens[j].text) {
                j += 1;
            }
            run_end = j;
            if j - i >= 2 {
                let (start, end) = (tokens[i].start, tokens[j - 1].end);
                out.push(Candidate { text: &text[start..end], start, end, joined: true });
            }
        }
        out.push(tokens[i]);
    }
    out
}
