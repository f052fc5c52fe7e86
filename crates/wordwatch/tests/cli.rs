//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    // Keep host configuration out of the picture.
    cmd.env_remove("WORDWATCH_STOP_WORDS")
        .env_remove("WORDWATCH_SNIPPET_CHARS")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_clean_text_succeeds() {
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["check", "--text", "some specific text"])
        .args(["--stop-words", "random\nalert me\nlala"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no stop words found"));
}

#[test]
fn check_matching_text_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["check", "--text", "some random text"])
        .args(["--stop-words", "random\nalert me\nlala"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ALERT:"))
        .stdout(predicate::str::contains("random"));
}

#[test]
fn check_without_any_stop_words_is_clean() {
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["check", "--text", "some random text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no stop words found"));
}

#[test]
fn check_json_reports_matched_phrases() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["--json", "check", "--text", "Alerts two text and one more"])
        .args(["--stop-words", "one\ntwo"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["matched"], true);
    // Ordered by first appearance in the text, not list order.
    assert_eq!(json["phrases"][0], "two");
    assert_eq!(json["phrases"][1], "one");
}

#[test]
fn check_reads_text_from_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("comment.txt");
    std::fs::write(&file, "this gives one alert").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["check", file.to_str().unwrap()])
        .args(["--stop-words", "one alert\nanother alert"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("one alert"));
}

#[test]
fn check_requires_some_input() {
    cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("provide a FILE argument or --text"));
}

#[test]
fn check_env_var_supplies_global_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .env("WORDWATCH_STOP_WORDS", "random\nalert me")
        .args(["check", "--text", "some random text"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ALERT:"));
}

#[test]
fn check_override_shadows_global_list() {
    // Text matches only the global list; the override replaces it entirely.
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .env("WORDWATCH_STOP_WORDS", "one alert\nanother alert")
        .args(["check", "--text", "this should give one alert"])
        .args(["--stop-words", "almost\nlast one"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no stop words found"));
}

// =============================================================================
// Snippets Command
// =============================================================================

#[test]
fn snippets_renders_report() {
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["snippets", "--text", "some random text"])
        .args(["--stop-words", "random\nalert me\nlala"])
        .args(["--chars", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("random\n\n...e random t..."));
}

#[test]
fn snippets_without_matches_prints_note() {
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["snippets", "--text", "some specific text"])
        .args(["--stop-words", "random\nalert me\nlala"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no stop words matched"));
}

#[test]
fn snippets_json_reports_offsets_and_report() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["--json", "snippets", "--text", "some random text"])
        .args(["--stop-words", "random"])
        .args(["--chars", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["matches"][0]["phrase"], "random");
    assert_eq!(json["matches"][0]["offsets"][0], 5);
    assert_eq!(json["report"], "random\n\n...e random t...");
}

#[test]
fn snippets_reads_stop_words_from_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let list = tmp.path().join("watched.txt");
    std::fs::write(&list, "one alert\r\nsecond alert\nthird alert").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["snippets", "--text", "and one alert or text"])
        .args(["--stop-words-file", list.to_str().unwrap()])
        .args(["--chars", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one alert\n\n...d one alert o..."));
}

#[test]
fn snippets_folds_entities_and_accents() {
    let tmp = tempfile::TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["snippets", "--text", "Alerts tw&#246; text"])
        .args(["--stop-words", "two"])
        .args(["--chars", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("two\n\n...ts two te..."));
}
