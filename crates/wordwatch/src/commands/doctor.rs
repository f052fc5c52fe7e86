//! Doctor command: diagnose configuration and the stop-word source.
//!
//! Answers the questions a confused operator asks first: which config file
//! is in effect, is a global stop-word list configured, and does it parse
//! into anything usable.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use wordwatch_core::StopWordList;
use wordwatch_core::config::{Config, ConfigSources, user_config_dir};

/// Arguments for the `doctor` subcommand.
#[derive(Args, Debug, Default)]
pub struct DoctorArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct DoctorReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    stop_words_configured: bool,
    stop_word_count: usize,
    /// Lines in the configured source that parse to nothing (blank after
    /// trimming) or duplicate an earlier phrase.
    discarded_lines: usize,
}

impl DoctorReport {
    fn build(config: &Config, sources: &ConfigSources) -> Self {
        let (count, discarded) = match config.stop_words.as_deref() {
            Some(raw) => {
                let list = StopWordList::parse(raw);
                let lines = raw.lines().count();
                (list.len(), lines.saturating_sub(list.len()))
            }
            None => (0, 0),
        };
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: user_config_dir().map(|p| p.to_string()),
            stop_words_configured: config.stop_words.is_some(),
            stop_word_count: count,
            discarded_lines: discarded,
        }
    }
}

/// Diagnose configuration discovery and the stop-word source.
#[instrument(name = "cmd_doctor", skip_all)]
pub fn cmd_doctor(
    _args: DoctorArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let report = DoctorReport::build(config, sources);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.config_file {
        Some(ref file) => println!("{} config file: {file}", "ok".green()),
        None => println!("{} no config file found; using defaults", "--".yellow()),
    }
    if let Some(ref dir) = report.user_config_dir {
        println!("{} user config dir: {dir}", "ok".green());
    }

    if report.stop_words_configured {
        println!(
            "{} global stop words: {} phrase(s)",
            "ok".green(),
            report.stop_word_count
        );
        if report.discarded_lines > 0 {
            println!(
                "{} {} blank or duplicate line(s) in the list are ignored",
                "--".yellow(),
                report.discarded_lines
            );
        }
        if report.stop_word_count == 0 {
            println!(
                "{} the configured list is empty; nothing will ever match",
                "!!".red()
            );
        }
    } else {
        println!(
            "{} no global stop words configured; only per-invocation lists will match",
            "--".yellow()
        );
    }

    Ok(())
}
