//! Stop-word list parsing and source resolution.
//!
//! A stop-word source is a newline-delimited string: one word or phrase per
//! line. Sources come from two places: the global configuration and an
//! optional per-invocation override. The override, when present,
//! fully replaces the global list (shadowing, never a merge).

/// An ordered, de-duplicated list of stop-word phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordList {
    phrases: Vec<String>,
}

impl StopWordList {
    /// Parse a newline-delimited source into a phrase list.
    ///
    /// Accepts both `\n` and `\r\n` line endings. Each line is trimmed;
    /// blank lines are dropped; duplicates keep their first position.
    pub fn parse(raw: &str) -> Self {
        let mut phrases: Vec<String> = Vec::new();
        for line in raw.lines() {
            let phrase = line.trim();
            if phrase.is_empty() {
                continue;
            }
            if !phrases.iter().any(|p| p == phrase) {
                phrases.push(phrase.to_string());
            }
        }
        Self { phrases }
    }

    /// Whether the list contains no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of phrases in the list.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Iterate over the phrases in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

/// Pick the effective stop-word source from an override and a global list.
///
/// The override wins outright when it is present and non-blank; otherwise
/// the global list is used. The two are never merged; a per-invocation
/// list is a complete replacement, so a text that only matches the global
/// list reports no match when an override is in effect.
pub fn resolve_stop_words<'a>(
    override_source: Option<&'a str>,
    global_source: Option<&'a str>,
) -> Option<&'a str> {
    override_source
        .filter(|s| !s.trim().is_empty())
        .or(global_source)
}
