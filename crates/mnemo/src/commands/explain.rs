//! Explain command — letter-by-letter mapping view.
//!
//! Shows the simplified single-digit-per-letter view. Ambiguous letters
//! display their canonical digit only; the `encode` and `check` commands
//! are the source of truth for what is actually accepted.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use mnemo_core::{encodings, mapping_details};

/// Arguments for the `explain` subcommand.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Word to explain.
    pub word: String,
}

/// Explain how each character of a word maps under the Major System.
#[instrument(name = "cmd_explain", skip_all, fields(word = %args.word))]
pub fn cmd_explain(args: ExplainArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(word = %args.word, "executing explain command");

    let details = mapping_details(&args.word);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("{}", args.word.bold());
    for detail in &details {
        if detail.ignored {
            println!("  {}  {}", detail.letter, "ignored".dimmed());
        } else if let Some(digit) = detail.digit {
            println!("  {}  {} {}", detail.letter, "→".dimmed(), digit.green());
        } else {
            println!("  {}  {}", detail.letter, "no mapping".yellow());
        }
    }

    let list = encodings(&args.word);
    if list != [String::new()] {
        println!("\n{} {}", "Encodings:".cyan(), list.join(", "));
    }
    Ok(())
}
