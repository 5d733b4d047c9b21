//! CLI Integration Tests
//!
//! These tests verify the CLI binary output formats and command behaviors
//! against fixture files and the built-in demo data.
//!
//! Run:
//! ```
//! cargo test --package vitals-cli --test cli_integration
//! ```

use std::path::Path;
use std::process::{Command, Output};

const AT: &str = "2026-10-17T12:00:00Z";

const FIXTURE: &str = r#"{
    "samples": {
        "height": [{ "value": 1.82, "date": "2026-03-01T08:00:00Z" }],
        "body-mass": [{ "value": 81.6, "date": "2026-10-15T07:00:00Z" }],
        "step-count": [
            { "value": 4000, "date": "2026-10-17T08:00:00Z" },
            { "value": 2200, "date": "2026-10-17T11:00:00Z" }
        ],
        "heart-rate": [
            { "value": 64, "date": "2026-10-17T07:00:00Z" },
            { "value": 72, "date": "2026-10-17T11:30:00Z" }
        ],
        "blood-pressure-systolic": [{ "value": 120, "date": "2026-10-17T09:00:00Z" }],
        "blood-pressure-diastolic": [{ "value": 80, "date": "2026-10-17T09:00:00Z" }]
    }
}"#;

/// Run vitals with a clean environment and return output
fn run_vitals(args: &[&str], config_home: &Path) -> Output {
    run_vitals_with(args, config_home, &[])
}

/// Run vitals with extra environment variables applied last
fn run_vitals_with(args: &[&str], config_home: &Path, env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_vitals"));
    command
        .args(args)
        .env_remove("VITALS_STORE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("TZ", "UTC")
        .env("XDG_CONFIG_HOME", config_home);
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("Failed to run vitals binary")
}

/// Write a fixture file and return its path as a string
fn write_fixture(dir: &Path, contents: &str) -> String {
    let path = dir.join("today.json");
    std::fs::write(&path, contents).expect("write fixture");
    path.display().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_vitals(&["--help"], dir.path());

    assert!(output.status.success(), "Help should succeed");

    let stdout = stdout(&output);
    assert!(stdout.contains("show"), "Help should list show command");
    assert!(stdout.contains("readings"), "Help should list readings command");
    assert!(stdout.contains("config"), "Help should list config command");
}

#[test]
fn test_version_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_vitals(&["--version"], dir.path());

    assert!(output.status.success(), "Version should succeed");
    assert!(stdout(&output).contains("vitals"));
}

#[test]
fn test_subcommand_help() {
    let dir = tempfile::tempdir().unwrap();
    for cmd in ["show", "readings", "config"] {
        let output = run_vitals(&[cmd, "--help"], dir.path());
        assert!(output.status.success(), "{} --help should succeed", cmd);
        assert!(!output.stdout.is_empty(), "{} --help should produce output", cmd);
    }
}

#[test]
fn test_no_color_env_values() {
    let dir = tempfile::tempdir().unwrap();
    for value in ["1", "true", "yes", "0", "false", ""] {
        let output = run_vitals_with(&["config", "path"], dir.path(), &[("NO_COLOR", value)]);
        assert!(
            output.status.success(),
            "NO_COLOR={:?} should be accepted, stderr: {}",
            value,
            stderr(&output)
        );
    }
}

// =============================================================================
// Show Command
// =============================================================================

#[test]
fn test_show_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), FIXTURE);
    let output = run_vitals(&["show", "--store", &store, "--at", AT], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("Health Metrics"));
    assert!(stdout.contains("Height:          2 meters"));
    assert!(stdout.contains("Weight:          82 kiloGrams"));
    assert!(stdout.contains("Step Count:      6200 steps"));
    assert!(stdout.contains("Heart Rate:      72"));
    assert!(stdout.contains("Blood Pressure:  120/80"));
}

#[test]
fn test_show_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), FIXTURE);
    let output = run_vitals(
        &["show", "--store", &store, "--at", AT, "--format", "json"],
        dir.path(),
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("show should print valid JSON");
    assert_eq!(json["phase"], "settled");
    assert_eq!(json["loading"], false);
    assert_eq!(json["height"], "2 meters");
    assert_eq!(json["blood_pressure"], "120/80");
    assert!(json["error"].is_null());
}

#[test]
fn test_show_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), "{}");
    let output = run_vitals(&["show", "--store", &store, "--at", AT], dir.path());

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Height:          -"));
    assert!(stdout.contains("Step Count:      0 steps"));
    assert!(stdout.contains("Heart Rate:      No Readings"));
}

#[test]
fn test_show_denied_authorization() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), r#"{"authorized": false}"#);
    let output = run_vitals(&["show", "--store", &store, "--at", AT], dir.path());

    let stdout = stdout(&output);
    assert!(stdout.contains("Health data authorization was denied"));
    assert!(stdout.contains("Step Count:      -"));
}

#[test]
fn test_show_live_echoes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), FIXTURE);
    let output = run_vitals(
        &["show", "--store", &store, "--at", AT, "--live", "--format", "json"],
        dir.path(),
    );

    assert!(output.status.success());
    assert!(stderr(&output).contains("Heart Rate: 72"));
    // stdout stays valid JSON
    assert!(serde_json::from_str::<serde_json::Value>(&stdout(&output)).is_ok());
}

#[test]
fn test_show_demo() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_vitals(&["show", "--demo", "--format", "json"], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["height"], "2 meters");
    assert_eq!(json["weight"], "72 kiloGrams");
}

#[test]
fn test_show_without_store_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_vitals(&["show"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("No health store specified"));
}

#[test]
fn test_show_invalid_fixture_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), r#"{"samples": {"mood": []}}"#);
    let output = run_vitals(&["show", "--store", &store], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load health store"));
}

// =============================================================================
// Readings Command
// =============================================================================

#[test]
fn test_readings_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), FIXTURE);
    let output = run_vitals(
        &["readings", "--store", &store, "--at", AT, "--metric", "heart-rate"],
        dir.path(),
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    let newest = stdout.find("2026-10-17T11:30:00Z  72").expect("newest reading");
    let oldest = stdout.find("2026-10-17T07:00:00Z  64").expect("oldest reading");
    assert!(newest < oldest, "readings should be newest first");
}

#[test]
fn test_readings_json_compact() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), FIXTURE);
    let output = run_vitals(
        &[
            "readings", "--store", &store, "--at", AT, "--metric", "step-count", "--format",
            "json", "--compact",
        ],
        dir.path(),
    );

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["metric"], "step-count");
    assert_eq!(json["count"], 2);
}

#[test]
fn test_readings_day_uses_offset_of_that_date() {
    let dir = tempfile::tempdir().unwrap();
    // June in Sydney is +10:00 (no daylight saving), whatever today's offset is
    let store = write_fixture(
        dir.path(),
        r#"{"samples": {"heart-rate": [{ "value": 68, "date": "2026-06-15T23:30:00+10:00" }]}}"#,
    );
    let output = run_vitals_with(
        &[
            "readings", "--store", &store, "--at", "2026-06-15T12:00:00+10:00", "--metric",
            "heart-rate", "--format", "json",
        ],
        dir.path(),
        &[("TZ", "Australia/Sydney")],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["count"], 1, "output: {}", stdout(&output));
}

#[test]
fn test_readings_denied_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = write_fixture(dir.path(), r#"{"authorized": false}"#);
    let output = run_vitals(
        &["readings", "--store", &store, "--metric", "heart-rate"],
        dir.path(),
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Health data authorization was denied"));
}

#[test]
fn test_readings_unknown_metric() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_vitals(&["readings", "--demo", "--metric", "mood"], dir.path());
    assert!(!output.status.success());
}

// =============================================================================
// Config Command
// =============================================================================

#[cfg(target_os = "linux")]
#[test]
fn test_config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_vitals(&["config", "path"], dir.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("vitals/config.toml"));

    let output = run_vitals(&["config", "set", "format", "json"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = run_vitals(&["config", "get", "format"], dir.path());
    assert_eq!(stdout(&output).trim(), "json");

    // The configured format applies when no flag is given
    let output = run_vitals(&["show", "--demo"], dir.path());
    assert!(serde_json::from_str::<serde_json::Value>(&stdout(&output)).is_ok());
}

#[test]
fn test_config_set_rejects_invalid_value() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_vitals(&["config", "set", "utc-offset", "soon"], dir.path());
    assert!(!output.status.success());
}
