//! Command implementations.

pub mod add;
pub mod check;
pub mod drill;
pub mod encode;
pub mod explain;
pub mod info;
pub mod progress;
pub mod words;

/// Validate a number argument before it reaches the core.
///
/// The core treats targets as opaque digit strings; the CLI rejects
/// anything else up front so users get a clear message instead of a
/// silent non-match.
pub fn ensure_number(number: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()),
        "invalid number {number:?}: expected decimal digits only",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_must_be_decimal_digits() {
        assert!(ensure_number("07").is_ok());
        assert!(ensure_number("0").is_ok());
        assert!(ensure_number("").is_err());
        assert!(ensure_number("1a").is_err());
        assert!(ensure_number("-1").is_err());
    }
}
