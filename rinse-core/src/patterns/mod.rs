//! Pattern generation for blacklist words.
//!
//! `fragments` renders the reusable separator and per-letter substitution
//! classes from the fixed tables; `compiler` expands a word into those
//! fragments, compiles it, and caches the result.

pub mod compiler;
pub mod fragments;
