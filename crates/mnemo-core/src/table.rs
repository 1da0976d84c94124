//! The Major System digit-to-sound table and its derived letter indexes.
//!
//! Ten fixed rules map each digit to the consonant sound(s) that represent
//! it. Only the first character of a sound label is the trigger letter;
//! anything after it ("SH", "G (hard)") is a descriptive label for display.
//! The derived indexes are built once and shared by reference across calls.

use std::collections::HashMap;
use std::sync::LazyLock;

/// One digit's consonant sounds in the Major System.
#[derive(Debug, Clone, Copy)]
pub struct DigitSound {
    /// The digit, 0-9.
    pub digit: u8,
    /// Sound labels for the digit. The first character of each label is the
    /// letter that triggers the digit; the rest is documentation.
    pub sounds: &'static [&'static str],
}

/// The fixed Major System table, one rule per digit.
pub static MAJOR_SYSTEM: &[DigitSound] = &[
    DigitSound { digit: 0, sounds: &["S", "Z"] },
    DigitSound { digit: 1, sounds: &["T", "D"] },
    DigitSound { digit: 2, sounds: &["N"] },
    DigitSound { digit: 3, sounds: &["M"] },
    DigitSound { digit: 4, sounds: &["R"] },
    DigitSound { digit: 5, sounds: &["L"] },
    DigitSound { digit: 6, sounds: &["J", "SH", "CH", "G (soft)"] },
    DigitSound { digit: 7, sounds: &["K", "G (hard)", "C (hard)"] },
    DigitSound { digit: 8, sounds: &["F", "V"] },
    DigitSound { digit: 9, sounds: &["P", "B"] },
];

/// Letters that never contribute a digit (vowels plus W, H, Y).
const IGNORED_LETTERS: &str = "AEIOUWHY";

/// Uppercase letter to every digit it can stand for, in rule order.
///
/// A letter may map to more than one digit (G stands for 6 or 7); the
/// ambiguous index drives the encoder's branching.
static LETTER_DIGITS: LazyLock<HashMap<char, Vec<u8>>> = LazyLock::new(|| {
    let mut index: HashMap<char, Vec<u8>> = HashMap::new();
    for rule in MAJOR_SYSTEM {
        for sound in rule.sounds {
            let trigger = trigger_letter(sound);
            let digits = index.entry(trigger).or_default();
            if !digits.contains(&rule.digit) {
                digits.push(rule.digit);
            }
        }
    }
    index
});

/// Uppercase letter to its single canonical digit (first-registered rule
/// wins). Backs the mapping-detail view only; acceptance uses the full
/// ambiguous index.
static CANONICAL_DIGITS: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for rule in MAJOR_SYSTEM {
        for sound in rule.sounds {
            index.entry(trigger_letter(sound)).or_insert(rule.digit);
        }
    }
    index
});

/// The trigger letter of a sound label: its first character, uppercased.
pub fn trigger_letter(sound: &str) -> char {
    sound
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or_default()
}

/// Is this character one of the ignored filler letters?
pub fn is_ignored(ch: char) -> bool {
    IGNORED_LETTERS.contains(ch.to_ascii_uppercase())
}

/// Every digit the (case-insensitive) letter can stand for, in rule order.
///
/// Returns `None` for ignored or unmapped characters.
pub fn candidate_digits(ch: char) -> Option<&'static [u8]> {
    LETTER_DIGITS
        .get(&ch.to_ascii_uppercase())
        .map(Vec::as_slice)
}

/// The single canonical digit for the (case-insensitive) letter, if any.
pub fn canonical_digit(ch: char) -> Option<u8> {
    CANONICAL_DIGITS.get(&ch.to_ascii_uppercase()).copied()
}

/// The table rule for a digit.
///
/// Returns `None` for anything outside 0-9.
pub fn rule_for(digit: u8) -> Option<&'static DigitSound> {
    MAJOR_SYSTEM.get(usize::from(digit))
}
