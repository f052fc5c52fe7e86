//! Core library for wordwatch.
//!
//! Detects occurrences of configured "stop word" phrases in free text and
//! renders bounded context snippets around each match. Matching is case-,
//! accent-, and HTML-entity-insensitive.
//!
//! # Modules
//!
//! - [`normalize`] - Canonical text form for comparison
//! - [`stopwords`] - Stop-word list parsing and source resolution
//! - [`alert`] - The matching and snippet-extraction engine
//! - [`condition`] - Rule-condition boundary for external engines
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordwatch_core::Alert;
//!
//! let alert = Alert::with_default_stop_words("random\nalert me");
//! assert!(alert.has_stop_words(Some("some random text"), None));
//! assert_eq!(
//!     alert.get_snippets(Some("some random text"), None, 2),
//!     "random\n\n...e random t..."
//! );
//! ```
#![deny(unsafe_code)]

pub mod alert;
pub mod condition;
pub mod config;
pub mod error;
pub mod normalize;
pub mod stopwords;

pub use alert::{Alert, DEFAULT_SNIPPET_CHARS, MatchReport, PhraseMatch};
pub use condition::TextAlertCondition;
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use stopwords::{StopWordList, resolve_stop_words};
