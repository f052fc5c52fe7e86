//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;
use wordwatch_core::StopWordList;
use wordwatch_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snippet_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_word_count: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let stop_word_count = config
            .stop_words
            .as_deref()
            .map(|raw| StopWordList::parse(raw).len());
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            snippet_chars: config.snippet_chars,
            stop_word_count,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let package = PackageInfo::new();
    let config_info = ConfigInfo::from_config(config, sources);

    if global_json {
        let full = FullInfo {
            package,
            config: config_info,
        };
        println!("{}", serde_json::to_string_pretty(&full)?);
        return Ok(());
    }

    println!("{} {}", package.name.bold(), package.version);
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.repository.is_empty() {
        println!("  {} {}", "repository:".cyan(), package.repository);
    }

    println!();
    match config_info.config_file {
        Some(ref file) => println!("  {} {file}", "config:".cyan()),
        None => println!("  {} (defaults)", "config:".cyan()),
    }
    println!("  {} {}", "log level:".cyan(), config_info.log_level);
    if let Some(ref dir) = config_info.log_dir {
        println!("  {} {dir}", "log dir:".cyan());
    }
    if let Some(chars) = config_info.snippet_chars {
        println!("  {} {chars}", "snippet chars:".cyan());
    }
    match config_info.stop_word_count {
        Some(count) => println!("  {} {count} configured", "stop words:".cyan()),
        None => println!("  {} none configured", "stop words:".cyan()),
    }

    Ok(())
}
