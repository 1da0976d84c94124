//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A command whose trainer state lives in (and whose cwd is) a tempdir,
/// so tests never touch the user's real store or project config.
#[allow(deprecated)]
fn cmd_in(tmp: &TempDir) -> Command {
    let mut c = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    c.current_dir(tmp.path());
    c.env("MNEMO_DATA_DIR", tmp.path());
    c
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
// Encode Command
// =============================================================================

#[test]
fn encode_unambiguous_word() {
    cmd()
        .args(["encode", "TEA"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn encode_ambiguous_word_lists_all_encodings() {
    cmd()
        .args(["encode", "GNU"])
        .assert()
        .success()
        .stdout(predicate::str::diff("62\n72\n"));
}

#[test]
fn encode_fully_ignored_word() {
    cmd()
        .args(["encode", "eye"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no contributing letters"));
}

#[test]
fn encode_json_outputs_array() {
    let output = cmd().args(["encode", "GNU", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("encode --json should output valid JSON");
    assert_eq!(json, serde_json::json!(["62", "72"]));
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_accepts_matching_word() {
    cmd()
        .args(["check", "23", "NAME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn check_accepts_subsequence_match() {
    // "2" is embedded in GNU's encodings "62"/"72".
    cmd().args(["check", "2", "GNU"]).assert().success();
}

#[test]
fn check_rejects_wrong_order() {
    cmd()
        .args(["check", "32", "NAME"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not encode"));
}

#[test]
fn check_rejects_non_digit_number() {
    cmd()
        .args(["check", "3a", "NAME"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number"));
}

#[test]
fn check_json_reports_encodings() {
    let output = cmd()
        .args(["check", "23", "NAME", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["matches"], true);
    assert_eq!(json["encodings"], serde_json::json!(["23"]));
}

// =============================================================================
// Explain Command
// =============================================================================

#[test]
fn explain_tags_every_character() {
    cmd()
        .args(["explain", "eNd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored"))
        .stdout(predicate::str::contains("2"))
        .stdout(predicate::str::contains("1"));
}

#[test]
fn explain_json_has_one_entry_per_character() {
    let output = cmd().args(["explain", "eNd", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["ignored"], true);
    assert_eq!(entries[1]["digit"], 2);
    assert_eq!(entries[2]["digit"], 1);
}

// =============================================================================
// Add & Words Commands
// =============================================================================

#[test]
fn add_stores_normalized_word() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp)
        .args(["add", "23", "nAmE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"));

    cmd_in(&tmp)
        .args(["words", "23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"));
}

#[test]
fn add_skips_duplicates_across_casings() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp).args(["add", "23", "name"]).assert().success();
    cmd_in(&tmp)
        .args(["add", "23", "NAME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already stored"));
}

#[test]
fn add_rejects_word_that_does_not_encode() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp)
        .args(["add", "23", "gnu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not encode"));

    cmd_in(&tmp)
        .args(["words", "23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No words stored"));
}

#[test]
fn leading_zero_numbers_are_distinct_keys() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp).args(["add", "07", "sack"]).assert().success();
    cmd_in(&tmp)
        .args(["words", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No words stored"));
    cmd_in(&tmp)
        .args(["words", "07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sack"));
}

#[test]
fn words_without_number_lists_everything() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp).args(["add", "23", "name"]).assert().success();
    cmd_in(&tmp).args(["add", "1", "tea"]).assert().success();

    cmd_in(&tmp)
        .args(["words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("Tea"));
}

// =============================================================================
// Drill Command
// =============================================================================

#[test]
fn drill_session_grades_and_summarizes() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp)
        .args(["drill", "--stage", "sounds", "--length", "2"])
        .write_stdin("zz\nzz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete"));
}

#[test]
fn drill_handles_early_eof() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp)
        .args(["drill", "--stage", "words", "--length", "5"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("of 0 correct"));
}

#[test]
fn drill_records_progress() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp)
        .args(["drill", "--stage", "sounds", "--mode", "sound-to-digit", "--length", "3"])
        // Not digits, so all three are graded incorrect.
        .write_stdin("x\nx\nx\n")
        .assert()
        .success();

    let output = cmd_in(&tmp).args(["progress", "--json"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let weak = json["weak_spots"].as_array().unwrap();
    assert!(!weak.is_empty());
    assert_eq!(weak[0]["correct"], 0);
}

#[test]
fn drill_json_summary() {
    let tmp = TempDir::new().unwrap();

    let output = cmd_in(&tmp)
        .args(["drill", "--stage", "sounds", "--length", "1", "--json"])
        .write_stdin("t\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["stage"], "sounds");
    assert_eq!(json["asked"], 1);
}

// =============================================================================
// Progress Command
// =============================================================================

#[test]
fn progress_with_no_history() {
    let tmp = TempDir::new().unwrap();

    cmd_in(&tmp)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("No practice recorded yet"));
}

#[test]
fn progress_json_includes_threshold() {
    let tmp = TempDir::new().unwrap();

    let output = cmd_in(&tmp).args(["progress", "--json"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["threshold"], 0.75);
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn invalid_subcommand_fails() {
    cmd().arg("definitely-not-a-command").assert().failure();
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}
