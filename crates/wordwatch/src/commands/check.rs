//! Check command: boolean stop-word gate.
//!
//! Evaluates the text through a [`TextAlertCondition`], the same boundary a
//! rule engine uses. Exits non-zero when any stop word matches, so the
//! command slots into scripts and CI gates.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordwatch_core::{Alert, Config, TextAlertCondition, resolve_stop_words};

use super::{InputArgs, StopWordArgs};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Subject text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Per-invocation stop-word override.
    #[command(flatten)]
    pub stop: StopWordArgs,
}

#[derive(Serialize)]
struct CheckReport {
    matched: bool,
    phrases: Vec<String>,
}

/// Check a text for stop words; non-zero exit when any match.
#[instrument(name = "cmd_check", skip_all)]
pub fn cmd_check(args: CheckArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let text = args.input.read()?;
    let override_source = args.stop.resolve()?;
    debug!(
        text_len = text.len(),
        has_override = override_source.is_some(),
        "executing check command"
    );

    let engine = Alert::from_config(config);
    let condition = match override_source {
        Some(ref source) => TextAlertCondition::with_stop_words(source.clone()),
        None => TextAlertCondition::new(),
    };
    let matched = condition.evaluate(&engine, Some(&text));

    // The phrase list is display detail; the condition decides the outcome.
    let phrases: Vec<String> = if matched {
        let source = resolve_stop_words(condition.stop_words(), engine.default_stop_words());
        engine
            .find_matches(Some(&text), source)
            .phrases()
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&CheckReport { matched, phrases })?
        );
    } else if matched {
        println!("{} {}", "ALERT:".red().bold(), phrases.join(", "));
    } else {
        println!("{} no stop words found", "clean".green());
    }

    if matched {
        bail!("text contains stop words");
    }

    Ok(())
}
