//! Workspace automation: man pages and shell completions for `mnemo`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into the output directory
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completions into the output directory
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> std::io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => {
            std::fs::create_dir_all(&out)?;
            clap_mangen::generate_to(mnemo::command(), &out)?;
            println!("man pages written to {}", out.display());
        }
        Task::Completions { out } => {
            std::fs::create_dir_all(&out)?;
            let mut command = mnemo::command();
            for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
                clap_complete::generate_to(shell, &mut command, "mnemo", &out)?;
            }
            println!("completions written to {}", out.display());
        }
    }
    Ok(())
}
