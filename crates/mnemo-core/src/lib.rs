//! Core library for mnemo.
//!
//! This crate provides the Major System encoding engine and the drill logic
//! used by the `mnemo` CLI and any downstream consumers. The Major System is
//! a mnemonic technique that maps digits to consonant sounds so numbers can
//! be memorized as words.
//!
//! # Modules
//!
//! - [`table`] - The fixed digit-to-sound table and derived letter indexes
//! - [`encode`] - All possible digit encodings of a word
//! - [`matcher`] - Does a word encode a target number?
//! - [`normalize`] - Canonical word casing for storage and dedup
//! - [`mapping`] - Letter-by-letter mapping view for explanations
//! - [`drill`] - Practice question generation and grading
//! - [`progress`] - Per-item accuracy tallies and weak-spot ranking
//! - [`bank`] - The number-to-words bank
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use mnemo_core::{encodings, matches};
//!
//! assert_eq!(encodings("TEA"), vec!["1".to_string()]);
//! assert!(matches("23", "NAME"));
//! ```
#![deny(unsafe_code)]

pub mod bank;
pub mod config;
pub mod drill;
pub mod encode;
pub mod error;
pub mod mapping;
pub mod matcher;
pub mod normalize;
pub mod progress;
pub mod table;

pub use bank::{AddOutcome, WordBank};
pub use config::{Config, ConfigLoader, LogLevel};
pub use encode::encodings;
pub use error::{BankError, BankResult, ConfigError, ConfigResult};
pub use mapping::{LetterMapping, mapping_details};
pub use matcher::{is_subsequence, matches};
pub use normalize::{Normalized, normalize, normalize_value};
pub use progress::{Progress, Tally};
