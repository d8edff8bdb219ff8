//! Integration tests for CLI JSON output behavior
//!
//! These tests verify that --json produces valid, parseable JSON for
//! automation and scripting workflows.

use std::process::Command;

fn run_webui_decode_json(raw: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_webui"))
        .args(["decode", raw, "--json"])
        .output()
        .expect("Failed to execute 'webui decode --json'")
}

#[test]
fn test_decode_json_outputs_object() {
    let output = run_webui_decode_json("{id:42|name:x}");

    assert!(
        output.status.success(),
        "webui decode --json failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let record: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(record, serde_json::json!({"id": "42", "name": "x"}));
}

/// Values stay strings even when they look numeric
#[test]
fn test_decode_json_values_are_strings() {
    let output = run_webui_decode_json("{id:12345}");
    assert!(output.status.success());

    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert!(record["id"].is_string());
}

/// An empty session is `{}`, not null
#[test]
fn test_decode_json_empty_is_empty_object() {
    let output = run_webui_decode_json("{}");
    assert!(output.status.success());

    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(record, serde_json::json!({}));
}

/// Failures print nothing on stdout, so piping into a JSON parser never
/// sees partial output
#[test]
fn test_decode_json_failure_has_empty_stdout() {
    let output = run_webui_decode_json("{id\"42}");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
