// rinse-core/tests/detection_tests.rs
use rinse_core::tables::{substitutes_for, SEPARATOR_CHARACTERS};
use rinse_core::{ProfanityDetector, ProfanityEngine, ScanOptions};
use test_log::test;

fn fuck_duck() -> ProfanityDetector {
    ProfanityDetector::new(&["fuck"], &["Duck"])
}

#[test]
fn test_reference_scenarios() {
    let detector = fuck_duck();
    assert!(!detector.has_profanity("have a nice day"));
    assert!(detector.has_profanity("f u c k you"));
    assert!(detector.has_profanity("fu(_)ck"));
    assert!(detector.has_profanity("f4ck off"));
    // Negative control: "Duck" does not even match the pattern.
    assert!(!detector.has_profanity("Duck"));
}

#[test]
fn test_whitelisted_token_is_clean() {
    let detector = ProfanityDetector::new(&["duck"], &["Duck"]);
    assert!(!detector.has_profanity("Duck is a bird"));
    let m = detector.find_first_match("Duck is a bird").unwrap();
    assert!(m.whitelisted);
    assert_eq!(m.token, "Duck");
}

#[test]
fn test_whitelist_is_case_sensitive() {
    let detector = ProfanityDetector::new(&["duck"], &["Duck"]);
    assert!(detector.has_profanity("DUCK is a bird"));
    assert!(detector.has_profanity("duck is a bird"));
}

#[test]
fn test_whitelist_compares_whole_token() {
    let detector = ProfanityDetector::new(&["duck"], &["Duck"]);
    // Punctuation stays attached, so "Duck!" is not the whitelisted token.
    assert!(detector.has_profanity("Duck!"));
}

#[test]
fn test_empty_string_is_never_profane() {
    assert!(!fuck_duck().has_profanity(""));
    assert_eq!(fuck_duck().obfuscate_if_profane(""), "");
}

#[test]
fn test_case_insensitive_blacklist() {
    let detector = fuck_duck();
    assert_eq!(detector.has_profanity("FUCK"), detector.has_profanity("fuck"));
    assert!(detector.has_profanity("FuCk"));

    let upper = ProfanityDetector::new(&["FUCK"], &[]);
    assert!(upper.has_profanity("fuck"));
}

#[test]
fn test_every_single_substitution_is_detected() {
    let detector = ProfanityDetector::new(&["fuck", "shit", "bitch", "whore"], &[]);
    for word in ["fuck", "shit", "bitch", "whore"] {
        let letters: Vec<char> = word.chars().collect();
        for (i, letter) in letters.iter().enumerate() {
            for substitute in substitutes_for(*letter).unwrap() {
                let token: String = letters
                    .iter()
                    .enumerate()
                    .map(|(j, c)| if j == i { *substitute } else { *c })
                    .collect();
                assert!(detector.has_profanity(&token), "{:?} should be detected", token);
            }
        }
    }
}

#[test]
fn test_every_separator_is_tolerated() {
    let detector = ProfanityDetector::new(&["shit"], &[]);
    for sep in SEPARATOR_CHARACTERS {
        let glue = sep.to_string().repeat(2);
        let token = ["s", "h", "i", "t"].join(glue.as_str());
        assert!(detector.has_profanity(&token), "{:?} should be detected", token);
    }
}

#[test]
fn test_fully_obfuscated_tokens() {
    let detector = ProfanityDetector::new(&["fuck", "shit", "asshole"], &[]);
    for token in ["ƒ_ü_ç_κ", "5.h.1.t", "@$$hø|ë", "4SSH0LE", "sh!!!!t"] {
        assert!(detector.has_profanity(token), "{:?} should be detected", token);
    }
    // '7' is not a registered substitute for 't'.
    assert!(!detector.has_profanity("5h17"));
}

#[test]
fn test_clean_text_stays_clean() {
    let detector = ProfanityDetector::new(&["fuck", "shit", "cunt"], &[]);
    for text in [
        "The quick brown fox jumps over the lazy dog.",
        "Please find the attached invoice.",
        "ship it, then check the duck pond",
    ] {
        assert!(!detector.has_profanity(text), "{:?} should be clean", text);
    }
}

#[test]
fn test_spaced_letters_need_joining() {
    let joined = fuck_duck();
    assert!(joined.has_profanity("well f u c k"));
    assert!(joined.has_profanity("f. u. c. k."));

    let options = ScanOptions { join_spaced_letters: false, ..ScanOptions::default() };
    let split_only = ProfanityDetector::with_options(&["fuck"], &["Duck"], options);
    assert!(!split_only.has_profanity("f u c k you"));
    assert!(split_only.has_profanity("f_u_c_k you"));
}

#[test]
fn test_obfuscate_preserves_length() {
    let detector = fuck_duck();
    let text = "well f u c k that";
    let masked = detector.obfuscate_if_profane(text);
    assert_eq!(masked.chars().count(), text.chars().count());
    assert!(masked.chars().all(|c| c == '*'));

    let clean = "have a nice day";
    assert_eq!(detector.obfuscate_if_profane(clean), clean);
}

#[test]
fn test_long_input_does_not_fail() {
    let detector = fuck_duck();
    let noisy = "._-".repeat(20_000);
    assert!(!detector.has_profanity(&noisy));
    let text = format!("{} f.u.c.k", "word ".repeat(10_000));
    assert!(detector.has_profanity(&text));
}

#[test]
fn test_detector_is_shareable_across_threads() {
    let detector = std::sync::Arc::new(fuck_duck());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let detector = std::sync::Arc::clone(&detector);
            std::thread::spawn(move || detector.has_profanity("fu(_)ck"))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_spaced_whitelisted_word_with_default_lists() {
    let config = rinse_core::ProfanityConfig::load_default_lists().unwrap();
    let detector = ProfanityDetector::from_config(&config);
    assert!(!detector.has_profanity("I need a c o c k t a i l"));
    assert!(detector.has_profanity("I need a c o c k"));
}
