//! Acceptance check: does a word encode a target number?
//!
//! A candidate word is accepted when the target digit-sequence appears as a
//! subsequence of at least one of the word's encodings. The subsequence
//! relation is deliberately permissive: extra digits before, between, or
//! after the target's digits are fine, so a longer mnemonic word can carry
//! a short number.

use crate::encode::encodings;

/// Does `needle` appear in `haystack` in order (not necessarily contiguous)?
///
/// Single pass over `haystack`, advancing into `needle` on each character
/// match; succeeds iff the whole needle is consumed. The empty needle is
/// vacuously a subsequence of anything.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = needle.chars().peekable();
    for ch in haystack.chars() {
        match remaining.peek() {
            Some(&next) if next == ch => {
                remaining.next();
            }
            Some(_) => {}
            None => return true,
        }
    }
    remaining.peek().is_none()
}

/// Is the candidate word an acceptable encoding of the target number?
///
/// True iff `target` is a subsequence of at least one member of
/// [`encodings`]`(word)`. A fully-ignored or empty word encodes only `""`
/// and therefore matches only an empty target.
#[tracing::instrument(level = "debug", skip(word), fields(target, word_len = word.len()))]
pub fn matches(target: &str, word: &str) -> bool {
    encodings(word)
        .iter()
        .any(|encoding| is_subsequence(target, encoding))
}
