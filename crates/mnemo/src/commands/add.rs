//! Add command — store a mnemonic word for a number.

use anyhow::bail;
use clap::Args;
use mnemo_core::Config;
use mnemo_core::bank::AddOutcome;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::store::{self, JsonFileStore};

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Number the word should encode (leading zeros significant).
    pub number: String,

    /// Word to store. It is normalized (Capitalized) before storage.
    pub word: String,
}

#[derive(Serialize)]
struct AddReport<'a> {
    number: &'a str,
    word: String,
    outcome: &'static str,
}

/// Validate, normalize, dedup, and persist a word for a number.
#[instrument(name = "cmd_add", skip_all, fields(number = %args.number, word = %args.word))]
pub fn cmd_add(args: AddArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(number = %args.number, word = %args.word, "executing add command");

    let mut db = JsonFileStore::open_default(config)?;
    let mut bank = store::load_bank(&db);

    let outcome = bank.add(&args.number, &args.word)?;
    if outcome == AddOutcome::Added {
        store::save_bank(&mut db, &bank)?;
    }

    let stored = mnemo_core::normalize(&args.word);
    if global_json {
        let report = AddReport {
            number: &args.number,
            word: stored,
            outcome: match outcome {
                AddOutcome::Added => "added",
                AddOutcome::Duplicate => "duplicate",
                AddOutcome::DoesNotEncode => "does-not-encode",
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        if outcome == AddOutcome::DoesNotEncode {
            std::process::exit(1);
        }
        return Ok(());
    }

    match outcome {
        AddOutcome::Added => {
            println!(
                "{} stored {} for {}",
                "Added:".green(),
                stored.bold(),
                args.number,
            );
            Ok(())
        }
        AddOutcome::Duplicate => {
            println!(
                "{} {} is already stored for {}",
                "Skipped:".yellow(),
                stored.bold(),
                args.number,
            );
            Ok(())
        }
        AddOutcome::DoesNotEncode => bail!(
            "{} does not encode {} — try `mnemo explain {}`",
            stored,
            args.number,
            args.word,
        ),
    }
}
