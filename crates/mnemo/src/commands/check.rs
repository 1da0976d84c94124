//! Check command — does a word encode a number?

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use mnemo_core::{encodings, matches};

use super::ensure_number;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Target number (decimal digits, leading zeros significant).
    pub number: String,

    /// Candidate word.
    pub word: String,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    number: &'a str,
    word: &'a str,
    matches: bool,
    encodings: Vec<String>,
}

/// Check whether a word is an acceptable encoding of a number.
///
/// Exits non-zero when the word does not encode the number, so the command
/// can gate scripts.
#[instrument(name = "cmd_check", skip_all, fields(number = %args.number, word = %args.word))]
pub fn cmd_check(args: CheckArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(number = %args.number, word = %args.word, "executing check command");
    ensure_number(&args.number)?;

    let accepted = matches(&args.number, &args.word);

    if global_json {
        let report = CheckReport {
            number: &args.number,
            word: &args.word,
            matches: accepted,
            encodings: encodings(&args.word),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !accepted {
            std::process::exit(1);
        }
        return Ok(());
    }

    if accepted {
        println!(
            "{} {} encodes {}",
            "PASS:".green(),
            args.word.bold(),
            args.number,
        );
        Ok(())
    } else {
        bail!(
            "{} does not encode {} (encodings: {})",
            args.word,
            args.number,
            encodings(&args.word).join(", "),
        );
    }
}
