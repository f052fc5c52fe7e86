//! Stop-word matching and snippet extraction.
//!
//! The [`Alert`] engine answers two questions about a piece of text: does it
//! contain any configured stop word, and where. Matching runs over the
//! normalized form of both text and phrases (see [`crate::normalize`]), so it
//! is case-, accent-, and entity-insensitive. Snippets are rendered from the
//! normalized text as well, so the recorded report format shows folded context,
//! not the original casing.
//!
//! No method here returns an error: absent text, an absent or empty stop-word
//! source, and malformed markup all degrade to "no match". The engine is a
//! best-effort advisory signal, not a validating parser.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::normalize::normalize;
use crate::stopwords::StopWordList;

/// Default context width, in characters, on each side of a match.
pub const DEFAULT_SNIPPET_CHARS: usize = 150;

/// All occurrences of one phrase within a scanned text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseMatch {
    /// The matched phrase, in normalized form.
    pub phrase: String,
    /// Character offsets of each occurrence in the normalized text,
    /// left to right.
    pub offsets: Vec<usize>,
}

/// Matched phrases, ordered by where each phrase first appears in the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    /// One entry per matched phrase; duplicates in the configured list
    /// collapse into the first entry.
    pub matches: Vec<PhraseMatch>,
}

impl MatchReport {
    /// Whether no phrase matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched phrases in report order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.phrase.as_str())
    }
}

/// Stop-word matching engine.
///
/// Holds the injected default (global) stop-word source, used whenever a
/// call does not supply its own list. Stateless otherwise: every call is a
/// pure function of its inputs, safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Alert {
    default_stop_words: Option<String>,
}

impl Alert {
    /// Engine with no default stop-word source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the given newline-delimited default source.
    pub fn with_default_stop_words(source: impl Into<String>) -> Self {
        Self {
            default_stop_words: Some(source.into()),
        }
    }

    /// Engine using the configuration's global stop-word list.
    ///
    /// A configuration without the setting (or one that failed to load and
    /// fell back to defaults) simply yields an engine that never matches.
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_stop_words: config.stop_words.clone(),
        }
    }

    /// The injected default source, if any.
    pub fn default_stop_words(&self) -> Option<&str> {
        self.default_stop_words.as_deref()
    }

    /// Whether `text` contains at least one phrase from the stop-word source.
    ///
    /// When `stop_words` is `None` the engine's default source is used. An
    /// absent text or an unresolvable/empty source yields `false`.
    #[tracing::instrument(skip_all)]
    pub fn has_stop_words(&self, text: Option<&str>, stop_words: Option<&str>) -> bool {
        !self.find_matches(text, stop_words).is_empty()
    }

    /// Find every occurrence of every stop-word phrase in `text`.
    ///
    /// Phrases are de-duplicated (first-seen order, compared after
    /// normalization) and the report is ordered by each phrase's earliest
    /// occurrence in the text, not by configuration order.
    #[tracing::instrument(skip_all)]
    pub fn find_matches(&self, text: Option<&str>, stop_words: Option<&str>) -> MatchReport {
        self.scan(text, stop_words).1
    }

    /// Shared scan: the normalized haystack plus the match report over it.
    fn scan(&self, text: Option<&str>, stop_words: Option<&str>) -> (String, MatchReport) {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return (String::new(), MatchReport::default());
        };
        let Some(source) = stop_words.or(self.default_stop_words.as_deref()) else {
            tracing::debug!("no stop-word source configured");
            return (String::new(), MatchReport::default());
        };

        let list = StopWordList::parse(source);
        if list.is_empty() {
            return (String::new(), MatchReport::default());
        }

        let haystack = normalize(text);
        let table = char_table(&haystack);

        let mut matches: Vec<PhraseMatch> = Vec::new();
        for raw in list.iter() {
            let phrase = normalize(raw).trim().to_string();
            if phrase.is_empty() || matches.iter().any(|m| m.phrase == phrase) {
                continue;
            }
            let offsets = occurrences(&haystack, &table, &phrase);
            if !offsets.is_empty() {
                matches.push(PhraseMatch { phrase, offsets });
            }
        }

        // Report order follows the text, not the configured list: the phrase
        // whose first occurrence comes earliest is listed first.
        matches.sort_by_key(|m| m.offsets[0]);
        tracing::debug!(matched = matches.len(), "scan complete");
        (haystack, MatchReport { matches })
    }

    /// Render the formatted match report for `text`.
    ///
    /// The result lists the matched phrases (comma-separated, in textual
    /// first-appearance order) followed by one snippet per occurrence, each
    /// introduced by a blank line and wrapped in `...` markers with up to
    /// `chars` characters of context on either side. Snippets follow the
    /// text left to right across all phrases, so occurrences of different
    /// phrases interleave. Returns an empty string when nothing matches.
    #[tracing::instrument(skip_all, fields(chars))]
    pub fn get_snippets(&self, text: Option<&str>, stop_words: Option<&str>, chars: usize) -> String {
        let (haystack, report) = self.scan(text, stop_words);
        if report.is_empty() {
            return String::new();
        }

        let mut hits: Vec<(usize, &str)> = report
            .matches
            .iter()
            .flat_map(|m| m.offsets.iter().map(|&offset| (offset, m.phrase.as_str())))
            .collect();
        hits.sort_unstable_by_key(|&(offset, _)| offset);

        let mut out = report.phrases().collect::<Vec<_>>().join(", ");
        for (offset, phrase) in hits {
            out.push_str(&snippet(&haystack, offset, phrase, chars));
        }
        out
    }
}

/// Byte offset of every char boundary in `s`, with a trailing end marker.
fn char_table(s: &str) -> Vec<usize> {
    let mut table: Vec<usize> = s.char_indices().map(|(b, _)| b).collect();
    table.push(s.len());
    table
}

/// Char index of the char starting at `byte` (a known boundary).
fn byte_to_char(table: &[usize], byte: usize) -> usize {
    table.binary_search(&byte).unwrap_or_else(|i| i - 1)
}

/// Character offsets of every non-overlapping occurrence of `needle`,
/// left to right.
fn occurrences(haystack: &str, table: &[usize], needle: &str) -> Vec<usize> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let at = from + pos;
        found.push(byte_to_char(table, at));
        from = at + needle.len();
    }
    found
}

/// One bounded context window around a match, in the recorded report format:
/// two newlines, `...`, up to `chars` characters of context on each side of
/// the phrase, `...`. Windows clip at the text bounds without padding and
/// never split a multi-byte character.
fn snippet(text: &str, start: usize, phrase: &str, chars: usize) -> String {
    let table = char_table(text);
    let total = table.len() - 1;
    let end = (start + phrase.chars().count()).min(total);
    let from = start.saturating_sub(chars);
    let to = (end + chars).min(total);
    format!("\n\n...{}...", &text[table[from]..table[to]])
}
