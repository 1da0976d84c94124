//! Error types for mnemo-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when working with the word bank.
#[derive(Error, Debug)]
pub enum BankError {
    /// The bank key is not a decimal-digit string.
    #[error("invalid number {number:?}: expected decimal digits only")]
    InvalidNumber {
        /// The key that was rejected.
        number: String,
    },
}

/// Result type alias using [`BankError`].
pub type BankResult<T> = Result<T, BankError>;
