//! Canonical word casing for storage and dedup.
//!
//! "hello", "HELLO", and "hElLo" all collapse to the stored form "Hello",
//! so the word bank dedups case-insensitively. Stored words arrive back
//! from the JSON store as untyped values; [`normalize_value`] is the typed
//! boundary that tells a genuinely absent word apart from an ill-typed one.

use serde_json::Value;

/// Normalize a word: first character uppercased, the rest lowercased.
///
/// Pure and idempotent; no locale sensitivity beyond basic case folding.
/// The empty string maps to itself.
pub fn normalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// A word read from the untyped storage boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// A string value, normalized.
    Word(String),
    /// JSON `null`: legitimately absent, passed through unchanged.
    Absent,
    /// Any non-string, non-null value: numbers, booleans, arrays, objects.
    NotAString,
}

/// Normalize a JSON value from the word store.
///
/// Strings normalize as [`normalize`] (the empty string stays a `Word`);
/// `null` passes through as [`Normalized::Absent`]; everything else is the
/// invalid-type sentinel [`Normalized::NotAString`]. Never panics.
pub fn normalize_value(value: &Value) -> Normalized {
    match value {
        Value::String(word) => Normalized::Word(normalize(word)),
        Value::Null => Normalized::Absent,
        _ => Normalized::NotAString,
    }
}
