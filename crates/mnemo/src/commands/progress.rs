//! Progress command — tallies and weak spots.

use clap::Args;
use mnemo_core::{Config, Tally};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::store::{self, JsonFileStore};

/// Arguments for the `progress` subcommand.
#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Accuracy below this counts as a weak spot (0.0-1.0).
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Serialize)]
struct ProgressReport<'a> {
    threshold: f64,
    tallies: &'a mnemo_core::Progress,
    weak_spots: Vec<WeakSpot<'a>>,
}

#[derive(Serialize)]
struct WeakSpot<'a> {
    key: &'a str,
    attempts: u32,
    correct: u32,
    accuracy: f64,
}

/// Show recorded practice progress and the weakest items.
#[instrument(name = "cmd_progress", skip_all)]
pub fn cmd_progress(args: ProgressArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(threshold = ?args.threshold, "executing progress command");

    let db = JsonFileStore::open_default(config)?;
    let progress = store::load_progress(&db);
    let threshold = args.threshold.unwrap_or(config.weak_threshold);

    if global_json {
        let weak_spots = progress
            .weak_spots(threshold)
            .into_iter()
            .map(|(key, tally)| WeakSpot {
                key,
                attempts: tally.attempts,
                correct: tally.correct,
                accuracy: tally.accuracy(),
            })
            .collect();
        let report = ProgressReport {
            threshold,
            tallies: &progress,
            weak_spots,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if progress.is_empty() {
        println!("No practice recorded yet. Try `mnemo drill --stage sounds`.");
        return Ok(());
    }

    println!("{}", "Progress".bold().underline());
    for (key, tally) in progress.iter() {
        println!("  {}  {}", key.bold(), format_tally(tally));
    }

    let weak = progress.weak_spots(threshold);
    println!();
    if weak.is_empty() {
        println!(
            "{} everything at or above {:.0}% accuracy",
            "Weak spots:".cyan(),
            threshold * 100.0,
        );
    } else {
        println!(
            "{} below {:.0}% accuracy, weakest first",
            "Weak spots:".cyan(),
            threshold * 100.0,
        );
        for (key, tally) in weak {
            println!("  {}  {}", key.red(), format_tally(tally));
        }
    }
    Ok(())
}

fn format_tally(tally: &Tally) -> String {
    format!(
        "{}/{} ({:.0}%)",
        tally.correct,
        tally.attempts,
        tally.accuracy() * 100.0,
    )
}
