//! Library interface for the `mnemo` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a
//! library, primarily for documentation generation and testing. The actual
//! entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`store`] - The JSON-file key-value store behind the trainer state
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man
//! pages and shell completions via `xtask`.

pub mod commands;
pub mod store;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG           Log filter (e.g., debug, mnemo=trace)
    MNEMO_LOG_DIR      Log directory
    MNEMO_DATA_DIR     Directory for the word bank and progress store
";
/// Command-line interface definition for mnemo.
#[derive(Parser)]
#[command(name = "mnemo")]
#[command(about = "Major System trainer: drill digit-sound and number-word associations", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Print every digit encoding of a word
    Encode(commands::encode::EncodeArgs),

    /// Check whether a word encodes a number
    Check(commands::check::CheckArgs),

    /// Explain how each letter of a word maps
    Explain(commands::explain::ExplainArgs),

    /// Store a mnemonic word for a number
    Add(commands::add::AddArgs),

    /// List stored words for a number
    Words(commands::words::WordsArgs),

    /// Run an interactive practice session
    Drill(commands::drill::DrillArgs),

    /// Show practice progress and weak spots
    Progress(commands::progress::ProgressArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
