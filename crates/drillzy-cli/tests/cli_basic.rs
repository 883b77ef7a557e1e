//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given data directory.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "drillzy-cli", "--"])
        .args(args)
        .env("DRILLZY_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed {:?}: {}", args, stderr);
    stdout
}

#[test]
fn test_survey_questions_listing() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_ok(dir.path(), &["survey", "questions"]);
    let questions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(questions.as_array().unwrap().len(), 5);
}

#[test]
fn test_full_daily_flow() {
    let dir = tempfile::tempdir().unwrap();

    // No profile yet: skill commands refuse to run.
    let (_, stderr, code) = run_cli(dir.path(), &["skill", "today"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("profile init"));

    let stdout = run_ok(dir.path(), &["profile", "init", "Ada"]);
    let profile: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(profile["name"], "Ada");
    assert!(profile["category"].is_null());

    // All answers point at builder options per the fixed question set.
    let stdout = run_ok(
        dir.path(),
        &[
            "survey", "submit", "--answer", "2", "--answer", "1", "--answer", "4", "--answer",
            "2", "--answer", "3",
        ],
    );
    let assignment: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(assignment["category"], "builder");

    let stdout = run_ok(dir.path(), &["skill", "assign"]);
    let skill: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(skill["category"], "builder");

    // Assigning twice is a friendly no-op.
    let stdout = run_ok(dir.path(), &["skill", "assign"]);
    assert!(stdout.contains("already assigned"));

    let stdout = run_ok(dir.path(), &["skill", "complete"]);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["streak"], 1);

    let stdout = run_ok(dir.path(), &["streak", "show"]);
    let streak: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(streak["streak"], 1);

    let stdout = run_ok(dir.path(), &["history", "list"]);
    let history: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);

    // Burning a completed skill fails.
    let (_, _, code) = run_cli(dir.path(), &["skill", "burn"]);
    assert_ne!(code, 0);
}

#[test]
fn test_survey_rejects_wrong_answer_count() {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["profile", "init", "Kay"]);
    let (_, stderr, code) = run_cli(dir.path(), &["survey", "submit", "--answer", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("expected 5 answers"));
}

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_ok(dir.path(), &["config", "get", "notifications.enabled"]);
    assert_eq!(stdout.trim(), "true");

    run_ok(dir.path(), &["config", "set", "notifications.enabled", "false"]);
    let stdout = run_ok(dir.path(), &["config", "get", "notifications.enabled"]);
    assert_eq!(stdout.trim(), "false");

    // Disabled reminders short-circuit the remind command.
    let stdout = run_ok(dir.path(), &["remind"]);
    assert!(stdout.contains("disabled"));

    run_ok(dir.path(), &["config", "reset"]);
    let stdout = run_ok(dir.path(), &["config", "get", "notifications.enabled"]);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_stats_commands_emit_json() {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["profile", "init", "Mo"]);

    let stdout = run_ok(dir.path(), &["stats", "weekly"]);
    let week: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(week.as_array().unwrap().len(), 7);

    let stdout = run_ok(dir.path(), &["stats", "categories"]);
    let breakdown: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(breakdown.as_array().unwrap().len(), 4);

    let stdout = run_ok(dir.path(), &["stats", "cumulative"]);
    let curve: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(curve.as_array().unwrap().is_empty());
}
