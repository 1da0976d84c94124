//! Drill command — interactive practice session.
//!
//! Reads answers line by line from stdin, grades them with the core drill
//! logic, and records a tally per item. Ending input early (Ctrl-D) ends
//! the session; whatever was answered still counts.

use std::io::{BufRead, Write};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use mnemo_core::Config;
use mnemo_core::drill::{self, Question, SoundDrillMode, Stage};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::store::{self, JsonFileStore};

/// Arguments for the `drill` subcommand.
#[derive(Args, Debug)]
pub struct DrillArgs {
    /// Practice stage.
    #[arg(long, value_enum, default_value_t = Stage::Sounds)]
    pub stage: Stage,

    /// Direction of the sounds stage (ignored for --stage words).
    #[arg(long, value_enum, default_value_t)]
    pub mode: SoundDrillMode,

    /// Questions in this session (default from config).
    #[arg(long)]
    pub length: Option<usize>,
}

#[derive(Serialize)]
struct SessionReport {
    stage: &'static str,
    asked: usize,
    correct: usize,
}

/// Run an interactive practice session.
#[instrument(name = "cmd_drill", skip_all, fields(stage = args.stage.as_str()))]
pub fn cmd_drill(args: DrillArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(stage = args.stage.as_str(), mode = ?args.mode, length = ?args.length, "executing drill command");

    let length = args.length.unwrap_or(config.drill_length);
    let mut db = JsonFileStore::open_default(config)?;
    let mut progress = store::load_progress(&db);
    let mut rng = rand::thread_rng();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let bar = ProgressBar::new(length as u64);
    bar.set_style(
        ProgressStyle::with_template("{pos}/{len} {bar:30.cyan/blue}").expect("valid template"),
    );

    let mut asked = 0usize;
    let mut correct = 0usize;
    for _ in 0..length {
        let question = match args.stage {
            Stage::Sounds => drill::sound_question(&mut rng, args.mode),
            Stage::Words => drill::word_question(&mut rng),
        };

        let Some(answer) = ask(&bar, &mut lines, &question)? else {
            break; // EOF ends the session early
        };

        let verdict = question.grade(&answer);
        asked += 1;
        progress.record(&question.stat_key(), verdict.correct);
        if verdict.correct {
            correct += 1;
            bar.suspend(|| println!("{} correct", "✓".green()));
        } else {
            bar.suspend(|| println!("{} incorrect — {}", "✗".red(), verdict.expected));
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    if asked > 0 {
        store::save_progress(&mut db, &progress)?;
    }

    if global_json {
        let report = SessionReport {
            stage: args.stage.as_str(),
            asked,
            correct,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "\nSession complete: {} of {} correct. See `mnemo progress`.",
            correct.to_string().bold(),
            asked,
        );
    }
    Ok(())
}

/// Show a question and read one answer line; `None` on end of input.
fn ask(
    bar: &ProgressBar,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    question: &Question,
) -> anyhow::Result<Option<String>> {
    bar.suspend(|| {
        println!("\n{}", question.prompt().bold());
        print!("> ");
        std::io::stdout().flush()?;
        match lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    })
}
