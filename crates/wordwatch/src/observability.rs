//! Logging and tracing initialization.
//!
//! Log output goes to a file when a location is known (explicit env path,
//! env/config log dir, or the platform data dir), keeping stdout clean for
//! command output. Without any file location, events go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file name used inside a log directory.
const LOG_FILE_NAME: &str = "wordwatch.log";

/// Resolved logging destinations.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (wins over any directory).
    log_path: Option<PathBuf>,
    /// Directory to place the log file in.
    log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as a lower-precedence fallback.
    ///
    /// Precedence: `WORDWATCH_LOG_PATH` > `WORDWATCH_LOG_DIR` > config
    /// `log_dir` > platform data dir.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("WORDWATCH_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("WORDWATCH_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(default_log_dir);
        Self { log_path, log_dir }
    }

    /// The log file to write, if any destination is known.
    fn log_file(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Platform log directory, e.g. `~/.local/share/wordwatch/logs` on Linux.
fn default_log_dir() -> Option<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "wordwatch")?;
    Some(proj_dirs.data_local_dir().join("logs"))
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces errors only and
/// each `-v` steps the level up from the config default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global tracing subscriber.
///
/// Returns the appender guard when logging to a file; it must be held for
/// the life of the process so buffered events are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    if let Some(path) = config.log_file() {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let file_name = path
            .file_name()
            .map_or_else(|| LOG_FILE_NAME.into(), |n| n.to_os_string());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        Ok(None)
    }
}
