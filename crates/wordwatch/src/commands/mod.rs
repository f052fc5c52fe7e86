//! Command implementations.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;

use wordwatch_core::normalize::decode_bytes;

pub mod check;
pub mod doctor;
pub mod info;
pub mod snippets;

/// Subject-text input, shared by the scanning commands.
///
/// The text comes either from a file argument or inline via `--text`. Files
/// are read as raw bytes and decoded best-effort, so a legacy comment dump
/// with a stray Latin-1 byte still scans instead of erroring.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// File containing the text to scan. Omit to use --text.
    pub file: Option<Utf8PathBuf>,

    /// Scan this text instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

impl InputArgs {
    /// Resolve the subject text from whichever source was given.
    pub fn read(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        let Some(ref path) = self.file else {
            anyhow::bail!("provide a FILE argument or --text");
        };
        let bytes =
            std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
        Ok(decode_bytes(&bytes))
    }
}

/// Per-invocation stop-word override, shared by the scanning commands.
///
/// When either flag is set, the resulting list fully replaces the
/// configured global list for this invocation (shadowing, not a merge).
#[derive(Args, Debug)]
pub struct StopWordArgs {
    /// Newline-delimited stop-word list, replacing the configured one.
    #[arg(long, value_name = "LIST")]
    pub stop_words: Option<String>,

    /// File with one stop-word phrase per line, replacing the configured list.
    #[arg(long, value_name = "FILE", conflicts_with = "stop_words")]
    pub stop_words_file: Option<Utf8PathBuf>,
}

impl StopWordArgs {
    /// Resolve the override source, reading the file form if given.
    pub fn resolve(&self) -> anyhow::Result<Option<String>> {
        if let Some(ref inline) = self.stop_words {
            return Ok(Some(inline.clone()));
        }
        match self.stop_words_file {
            Some(ref path) => {
                let bytes = std::fs::read(path.as_std_path())
                    .with_context(|| format!("failed to read {path}"))?;
                Ok(Some(decode_bytes(&bytes)))
            }
            None => Ok(None),
        }
    }
}
