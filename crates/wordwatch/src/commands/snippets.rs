//! Snippets command: render the formatted match report.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordwatch_core::{Alert, Config, DEFAULT_SNIPPET_CHARS, PhraseMatch};

use super::{InputArgs, StopWordArgs};

/// Arguments for the `snippets` subcommand.
#[derive(Args, Debug)]
pub struct SnippetsArgs {
    /// Subject text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Per-invocation stop-word override.
    #[command(flatten)]
    pub stop: StopWordArgs,

    /// Context characters on each side of a match.
    #[arg(long, value_name = "N")]
    pub chars: Option<usize>,
}

#[derive(Serialize)]
struct SnippetsReport {
    matches: Vec<PhraseMatch>,
    report: String,
}

/// Print matched stop words with context snippets.
#[instrument(name = "cmd_snippets", skip_all)]
pub fn cmd_snippets(args: SnippetsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let text = args.input.read()?;
    let override_source = args.stop.resolve()?;
    let chars = args
        .chars
        .or(config.snippet_chars)
        .unwrap_or(DEFAULT_SNIPPET_CHARS);
    debug!(text_len = text.len(), chars, "executing snippets command");

    let engine = Alert::from_config(config);
    let report = engine.get_snippets(Some(&text), override_source.as_deref(), chars);

    if global_json {
        let matches = engine
            .find_matches(Some(&text), override_source.as_deref())
            .matches;
        println!(
            "{}",
            serde_json::to_string_pretty(&SnippetsReport { matches, report })?
        );
        return Ok(());
    }

    if report.is_empty() {
        println!("{}", "no stop words matched".dimmed());
    } else {
        println!("{report}");
    }

    Ok(())
}
