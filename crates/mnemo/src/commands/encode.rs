//! Encode command — every digit encoding of a word.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use mnemo_core::encodings;

/// Arguments for the `encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Word to encode.
    pub word: String,
}

/// Print every possible digit encoding of a word, one per line.
#[instrument(name = "cmd_encode", skip_all, fields(word = %args.word))]
pub fn cmd_encode(args: EncodeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(word = %args.word, "executing encode command");

    let list = encodings(&args.word);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if list == [String::new()] {
        println!(
            "{} has no contributing letters; it encodes the empty string",
            args.word.bold()
        );
        return Ok(());
    }

    for encoding in &list {
        println!("{encoding}");
    }
    Ok(())
}
