//! Letter-by-letter mapping view for explanations.
//!
//! A simplified visual aid: ambiguous letters resolve to their single
//! canonical digit (first-registered rule wins) instead of branching, and
//! unmapped letters are tagged rather than silently dropped. Informative
//! only; acceptance always goes through [`crate::encode`] and
//! [`crate::matcher`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::table;

/// How one input character maps under the Major System.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LetterMapping {
    /// The character, original case preserved for display.
    pub letter: char,
    /// Whether the character contributes a digit.
    pub mapped: bool,
    /// The canonical digit, when mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit: Option<u8>,
    /// Whether the character is one of the ignored filler letters.
    pub ignored: bool,
}

/// Describe how each character of `word` maps, one entry per character.
#[tracing::instrument(level = "debug", skip(word), fields(word_len = word.len()))]
pub fn mapping_details(word: &str) -> Vec<LetterMapping> {
    word.chars()
        .map(|letter| {
            if table::is_ignored(letter) {
                LetterMapping { letter, mapped: false, digit: None, ignored: true }
            } else if let Some(digit) = table::canonical_digit(letter) {
                LetterMapping { letter, mapped: true, digit: Some(digit), ignored: false }
            } else {
                LetterMapping { letter, mapped: false, digit: None, ignored: false }
            }
        })
        .collect()
}
