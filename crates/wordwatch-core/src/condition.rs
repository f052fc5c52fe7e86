//! Rule-condition evaluation.
//!
//! This is the boundary a rule engine calls through: it supplies the subject
//! text and an optional per-rule stop-word list, and gets back a boolean.
//! The per-rule list, when present and non-blank, fully shadows the engine's
//! global list; a text that only matches the global list does *not* trigger
//! a condition carrying its own list.

use crate::alert::Alert;
use crate::stopwords::resolve_stop_words;

/// A condition that fires when the subject text contains a stop word.
///
/// Carries an optional local stop-word list. Evaluation resolves local
/// vs. global via [`resolve_stop_words`] and delegates to
/// [`Alert::has_stop_words`]; it never fails, and no source anywhere means
/// the condition simply does not fire.
#[derive(Debug, Clone, Default)]
pub struct TextAlertCondition {
    stop_words: Option<String>,
}

impl TextAlertCondition {
    /// Condition with no local list; the engine's global list applies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Condition with its own newline-delimited stop-word list.
    pub fn with_stop_words(source: impl Into<String>) -> Self {
        Self {
            stop_words: Some(source.into()),
        }
    }

    /// The local stop-word list, if any.
    pub fn stop_words(&self) -> Option<&str> {
        self.stop_words.as_deref()
    }

    /// Whether the condition fires for the given text.
    #[tracing::instrument(skip_all, fields(has_local = self.stop_words.is_some()))]
    pub fn evaluate(&self, engine: &Alert, text: Option<&str>) -> bool {
        match resolve_stop_words(self.stop_words.as_deref(), engine.default_stop_words()) {
            Some(source) => engine.has_stop_words(text, Some(source)),
            None => false,
        }
    }
}
