//! The number-to-words bank.
//!
//! Stores the mnemonic words a user has collected for each number. Keys
//! are literal digit strings: `"00"` and `"0"` are distinct entries.
//! Words are validated against the encoder before they are stored, and
//! deduped case-insensitively via their normalized form.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{BankError, BankResult};
use crate::matcher;
use crate::normalize::normalize;

/// What happened when a word was offered to the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The word was stored.
    Added,
    /// The word (up to casing) was already stored for this number.
    Duplicate,
    /// The word does not encode the number and was rejected.
    DoesNotEncode,
}

/// Mnemonic words keyed by the number they encode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct WordBank {
    words: BTreeMap<String, Vec<String>>,
}

impl WordBank {
    /// Offer a word for a number.
    ///
    /// The number must be a non-empty decimal-digit string. The word is
    /// normalized before storage, rejected when [`matcher::matches`] does
    /// not hold, and deduped against already-stored words.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add(&mut self, number: &str, word: &str) -> BankResult<AddOutcome> {
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(BankError::InvalidNumber { number: number.to_string() });
        }

        let stored = normalize(word);
        if stored.is_empty() || !matcher::matches(number, &stored) {
            return Ok(AddOutcome::DoesNotEncode);
        }

        let entry = self.words.entry(number.to_string()).or_default();
        if entry.contains(&stored) {
            return Ok(AddOutcome::Duplicate);
        }
        entry.push(stored);
        Ok(AddOutcome::Added)
    }

    /// The stored words for a number, in insertion order.
    pub fn words_for(&self, number: &str) -> &[String] {
        self.words.get(number).map_or(&[], Vec::as_slice)
    }

    /// All numbers with at least one stored word, in key order.
    pub fn numbers(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Whether the bank holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_and_normalizes() {
        let mut bank = WordBank::default();
        assert_eq!(bank.add("23", "nAmE").unwrap(), AddOutcome::Added);
        assert_eq!(bank.words_for("23"), &["Name".to_string()]);
    }

    #[test]
    fn dedups_case_insensitively() {
        let mut bank = WordBank::default();
        bank.add("23", "Name").unwrap();
        assert_eq!(bank.add("23", "NAME").unwrap(), AddOutcome::Duplicate);
        assert_eq!(bank.words_for("23").len(), 1);
    }

    #[test]
    fn rejects_words_that_do_not_encode() {
        let mut bank = WordBank::default();
        assert_eq!(bank.add("23", "GNU").unwrap(), AddOutcome::DoesNotEncode);
        assert_eq!(bank.add("23", "").unwrap(), AddOutcome::DoesNotEncode);
        assert!(bank.is_empty());
    }

    #[test]
    fn accepts_through_ambiguity() {
        // "Gnu" encodes to 62 or 72; both targets accept it.
        let mut bank = WordBank::default();
        assert_eq!(bank.add("62", "Gnu").unwrap(), AddOutcome::Added);
        assert_eq!(bank.add("72", "Gnu").unwrap(), AddOutcome::Added);
    }

    #[test]
    fn leading_zero_numbers_are_distinct() {
        let mut bank = WordBank::default();
        // "Sack" carries 07 in one of its encodings; "7" and "07" are
        // separate entries.
        bank.add("07", "Sack").unwrap();
        bank.add("7", "Key").unwrap();
        assert_eq!(bank.words_for("07"), &["Sack".to_string()]);
        assert_eq!(bank.words_for("7"), &["Key".to_string()]);
        assert!(bank.words_for("0").is_empty());
    }

    #[test]
    fn invalid_numbers_error() {
        let mut bank = WordBank::default();
        assert!(bank.add("", "Name").is_err());
        assert!(bank.add("2a", "Name").is_err());
        assert!(bank.add("-2", "Name").is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let mut bank = WordBank::default();
        bank.add("23", "Name").unwrap();
        bank.add("23", "Enemy").unwrap();
        let json = serde_json::to_string(&bank).unwrap();
        let back: WordBank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bank);
    }
}
