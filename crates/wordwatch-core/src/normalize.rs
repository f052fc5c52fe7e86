//! Text normalization for comparison.
//!
//! Raw comment text arrives with HTML entities, mixed case, accents, and
//! irregular whitespace. [`normalize`] folds all of that into a canonical
//! form so that phrase matching is a plain substring search.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Regex for runs of whitespace (spaces, tabs, newlines).
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize text into its canonical comparison form.
///
/// Steps, in order:
/// 1. Decode numeric and named HTML entities (`&#220;` becomes `Ü`).
/// 2. Apply Unicode compatibility decomposition (NFKD) and drop combining
///    marks, folding accented letters to their base letter.
/// 3. Lowercase.
/// 4. Collapse each run of whitespace into a single space.
///
/// The result is idempotent: normalizing an already-normalized string
/// returns it unchanged.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn normalize(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let folded: String = decoded
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    WHITESPACE_RUN.replace_all(&folded, " ").into_owned()
}

/// Decode raw bytes into text, best effort.
///
/// Valid UTF-8 passes through unchanged. Anything else falls back to a
/// single-byte-per-character (Latin-1) interpretation so that legacy
/// inputs never fail to decode.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_text_left_as_is() {
        assert_eq!(normalize("normal text"), "normal text");
    }

    #[test]
    fn lower_cases() {
        assert_eq!(normalize("UAU"), "uau");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(normalize("älert"), "alert");
    }

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(normalize("Älert"), "alert");
    }

    #[test]
    fn decodes_numeric_entity() {
        assert_eq!(normalize("alert&#220;s"), "alertus");
    }

    #[test]
    fn decodes_numeric_entity_lower_case() {
        assert_eq!(normalize("alert&#252;s"), "alertus");
    }

    #[test]
    fn decodes_named_entity() {
        assert_eq!(normalize("alert&Uuml;s"), "alertus");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("alert     text"), "alert text");
    }

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize("alert \t\n text"), "alert text");
    }

    #[test]
    fn idempotent() {
        let inputs = ["Älert&#220;s   here", "plain", "", "twö  &amp; one"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn bare_ampersand_passes_through() {
        // An ampersand that starts no entity is kept as literal text.
        assert_eq!(normalize("alert & co"), "alert & co");
    }

    #[test]
    fn decode_bytes_valid_utf8() {
        assert_eq!(decode_bytes("some string".as_bytes()), "some string");
    }

    #[test]
    fn decode_bytes_latin1_fallback() {
        // 0xFC is ü in Latin-1 and invalid as a standalone UTF-8 byte.
        let decoded = decode_bytes(b"some \xfc");
        assert_eq!(decoded, "some \u{fc}");
        assert_eq!(normalize(&decoded), "some u");
    }
}
