//! All possible digit encodings of a word.
//!
//! Ambiguous letters (G can stand for 6 or 7, S for 0 or 6) make a word
//! encode to more than one digit-string; the encoder enumerates the full
//! Cartesian product. Branching factors stay tiny in practice, so the
//! exponential worst case never bites on real words.

use crate::table;

/// Every digit-string the word can encode, in a fixed enumeration order.
///
/// Per character: ignored letters (A, E, I, O, U, W, H, Y) contribute
/// nothing; letters in the table contribute their candidate digits; any
/// other character contributes nothing, silently. The result is the
/// Cartesian product over contributing letters, concatenated in original
/// letter order.
///
/// The first letter's digit choice is the outermost (slowest-varying) loop,
/// so enumeration order is stable and documented. Callers that only test
/// membership can rely on the result never being empty: a word with no
/// contributing letters encodes to `[""]`.
#[tracing::instrument(level = "debug", skip(word), fields(word_len = word.len()))]
pub fn encodings(word: &str) -> Vec<String> {
    let options: Vec<&'static [u8]> = word
        .chars()
        .filter(|&ch| !table::is_ignored(ch))
        .filter_map(table::candidate_digits)
        .collect();

    let mut combos = vec![String::new()];
    for digits in options {
        let mut next = Vec::with_capacity(combos.len() * digits.len());
        for prefix in &combos {
            for &digit in digits {
                let mut combo = String::with_capacity(prefix.len() + 1);
                combo.push_str(prefix);
                combo.push(char::from(b'0' + digit));
                next.push(combo);
            }
        }
        combos = next;
    }
    combos
}
