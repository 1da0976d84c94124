//! Words command — list stored words for a number.

use clap::Args;
use mnemo_core::Config;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::ensure_number;
use crate::store::{self, JsonFileStore};

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Number to list words for. Omit to list every number with words.
    pub number: Option<String>,
}

/// List stored mnemonic words.
#[instrument(name = "cmd_words", skip_all, fields(number = ?args.number))]
pub fn cmd_words(args: WordsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(number = ?args.number, "executing words command");

    let db = JsonFileStore::open_default(config)?;
    let bank = store::load_bank(&db);

    if let Some(ref number) = args.number {
        ensure_number(number)?;
        let words = bank.words_for(number);

        if global_json {
            println!("{}", serde_json::to_string_pretty(&words)?);
        } else if words.is_empty() {
            println!("No words stored for {number}.");
        } else {
            println!("{}", number.bold());
            for word in words {
                println!("  {word}");
            }
        }
        return Ok(());
    }

    if global_json {
        let all: std::collections::BTreeMap<&str, &[String]> = bank
            .numbers()
            .map(|n| (n, bank.words_for(n)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else if bank.is_empty() {
        println!("No words stored yet. Try `mnemo add 23 name`.");
    } else {
        for number in bank.numbers() {
            println!(
                "{}  {}",
                number.bold(),
                bank.words_for(number).join(", "),
            );
        }
    }
    Ok(())
}
