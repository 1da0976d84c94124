//! Logging and tracing setup for the CLI.
//!
//! Console logs go to stderr so stdout stays clean for command output and
//! `--json`. When a log directory is configured (config `log_dir`,
//! `MNEMO_LOG_DIR`, or `MNEMO_LOG_PATH`), a JSONL file layer is added via a
//! non-blocking appender; the returned guard must be held for the process
//! lifetime so buffered lines are flushed on exit.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where file logs should go, if anywhere.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (takes precedence over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for rotating JSONL log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as a fallback.
    ///
    /// `MNEMO_LOG_PATH` names an exact file; `MNEMO_LOG_DIR` a directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("MNEMO_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("MNEMO_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` always wins. Otherwise `--quiet` forces `error`, one `-v`
/// means `debug`, two or more mean `trace`, and with neither the config
/// file's level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Returns the appender guard when file logging is active; dropping it
/// early loses buffered log lines.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let file_appender = if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(dir)?;
        let name = path
            .file_name()
            .map_or_else(|| "mnemo.log".into(), std::ffi::OsStr::to_os_string);
        Some(tracing_appender::rolling::never(dir, name))
    } else if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)?;
        Some(tracing_appender::rolling::daily(dir, "mnemo.jsonl"))
    } else {
        None
    };

    match file_appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            Ok(None)
        }
    }
}
