//! tables.rs - Fixed character tables used to build obfuscation-tolerant patterns.
//!
//! Both tables are plain `static` data. Nothing in the crate writes to them, and
//! callers cannot extend them; a different table means a different build.
//!
//! License: MIT OR Apache-2.0

/// Characters treated as noise between the letters of an obfuscated word.
///
/// These are matched literally (and escaped) inside the separator class.
pub static SEPARATOR_CHARACTERS: &[char] = &[
    '@', '#', '%', '&', '_', ';', '\'', '"', ',', '~', '`', '|', '!', '$', '^', '*', '(', ')',
    '-', '+', '=', '{', '}', '[', ']', ':', '<', '>', '?', '.', '/',
];

/// Separator classes that are already in regex syntax and must not be escaped.
pub static ESCAPED_SEPARATOR_CLASSES: &[&str] = &[r"\s"];

/// Maps each canonical lowercase letter to the characters a writer might use in its place.
///
/// The first entry of every row is the letter itself. Rows are ordered `a` to `z`.
pub static SUBSTITUTIONS: [(char, &[char]); 26] = [
    ('a', &[
        'a', '4', '@', 'Á', 'á', 'À', 'Â', 'à', 'â', 'Ä', 'ä', 'Ã', 'ã', 'Å', 'å', 'æ', 'Æ', 'α',
        'Δ', 'Λ', 'λ',
    ]),
    ('b', &['b', '8', '\\', '3', 'ß', 'Β', 'β']),
    ('c', &['c', 'Ç', 'ç', 'ć', 'Ć', 'č', 'Č', '¢', '€', '<', '(', '{', '©']),
    ('d', &['d', '\\', ')', 'Þ', 'þ', 'Ð', 'ð']),
    ('e', &[
        'e', '3', '€', 'È', 'è', 'É', 'é', 'Ê', 'ê', 'ë', 'Ë', 'ē', 'Ē', 'ė', 'Ė', 'ę', 'Ę', '∑',
    ]),
    ('f', &['f', 'ƒ']),
    ('g', &['g', '6', '9']),
    ('h', &['h', 'Η']),
    ('i', &[
        'i', '!', '|', ']', '[', '1', '∫', 'Ì', 'Í', 'Î', 'Ï', 'ì', 'í', 'î', 'ï', 'ī', 'Ī', 'į',
        'Į',
    ]),
    ('j', &['j']),
    ('k', &['k', 'Κ', 'κ']),
    ('l', &['l', '!', '|', ']', '[', '£', '∫', 'Ì', 'Í', 'Î', 'Ï', 'ł', 'Ł']),
    ('m', &['m']),
    ('n', &['n', 'η', 'Ν', 'Π', 'ñ', 'Ñ', 'ń', 'Ń']),
    ('o', &[
        'o', '0', 'Ο', 'ο', 'Φ', '¤', '°', 'ø', 'ô', 'Ô', 'ö', 'Ö', 'ò', 'Ò', 'ó', 'Ó', 'œ', 'Œ',
        'Ø', 'ō', 'Ō', 'õ', 'Õ',
    ]),
    ('p', &['p', 'ρ', 'Ρ', '¶', 'þ']),
    ('q', &['q']),
    ('r', &['r', '®']),
    ('s', &['s', '5', '$', '§', 'ß', 'Ś', 'ś', 'Š', 'š']),
    ('t', &['t', 'Τ', 'τ']),
    // '4' is a common vowel swap for `u` (f4ck).
    ('u', &['u', '4', 'υ', 'µ', 'û', 'ü', 'ù', 'ú', 'ū', 'Û', 'Ü', 'Ù', 'Ú', 'Ū']),
    ('v', &['v', 'υ', 'ν']),
    ('w', &['w', 'ω', 'ψ', 'Ψ']),
    ('x', &['x', 'Χ', 'χ']),
    ('y', &['y', '¥', 'γ', 'ÿ', 'ý', 'Ÿ', 'Ý']),
    ('z', &['z', 'Ζ', 'ž', 'Ž', 'ź', 'Ź', 'ż', 'Ż']),
];

/// Returns the substitutes registered for `letter`, or `None` outside `a..=z`.
pub fn substitutes_for(letter: char) -> Option<&'static [char]> {
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let index = (letter as u8 - b'a') as usize;
    Some(SUBSTITUTIONS[index].1)
}

/// True if `c` is noise that may sit between the letters of an obfuscated word.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATOR_CHARACTERS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rows_are_in_alphabetical_order() {
        for (i, (letter, subs)) in SUBSTITUTIONS.iter().enumerate() {
            assert_eq!(*letter, (b'a' + i as u8) as char);
            assert_eq!(subs[0], *letter, "row '{}' must start with the letter itself", letter);
        }
    }

    #[test]
    fn test_rows_have_no_duplicates() {
        for (letter, subs) in SUBSTITUTIONS.iter() {
            let unique: HashSet<&char> = subs.iter().collect();
            assert_eq!(unique.len(), subs.len(), "row '{}' has a duplicate substitute", letter);
        }
    }

    #[test]
    fn test_substitutes_for_lookup() {
        assert!(substitutes_for('a').unwrap().contains(&'@'));
        assert!(substitutes_for('u').unwrap().contains(&'4'));
        assert!(substitutes_for('A').is_none());
        assert!(substitutes_for('1').is_none());
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator('_'));
        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(!is_separator('f'));
        assert!(!is_separator('4'));
    }
}
