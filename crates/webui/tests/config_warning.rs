//! Integration tests for configuration loading from the CLI.
//!
//! Project config lives in `./.webui/config.toml`, so each test runs the
//! binary from a temp dir holding its own config.

use std::fs;
use std::path::Path;
use std::process::Command;

fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".webui");
    fs::create_dir_all(&config_dir).expect("Failed to create .webui dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

fn run_webui_in(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_webui"))
        .current_dir(dir)
        .env_remove("WEBUI_COOKIE_NAME")
        .env_remove("WEBUI_AUTH_ENDPOINT")
        .env_remove("WEBUI_INSTANCES_ENDPOINT")
        .env_remove("WEBUI_REFRESH_INTERVAL_SECS")
        .env_remove("WEBUI_SESSION_COOKIE")
        .args(args)
        .output()
        .expect("Failed to execute webui")
}

/// `view` falls back to defaults with a warning when the config is broken.
#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "invalid toml [[[");

    // Nothing listens on the endpoint; the warning is printed before the fetch
    let output = run_webui_in(
        temp_dir.path(),
        &[
            "view",
            "--instances-endpoint",
            "http://127.0.0.1:9/ec2/instances/",
        ],
    );

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
}

/// `config` reports a broken file as an error instead of printing defaults.
#[test]
fn test_config_command_fails_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "invalid toml [[[");

    let output = run_webui_in(temp_dir.path(), &["config"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"), "got: {}", stderr);
}

#[test]
fn test_config_command_prints_merged_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(
        temp_dir.path(),
        r#"
[instances]
endpoint = "https://api.example.com/ec2/instances/"
ordering = "issue"
"#,
    );

    let output = run_webui_in(temp_dir.path(), &["config"]);

    assert!(
        output.status.success(),
        "webui config failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed: toml::Value = toml::from_str(&stdout).expect("stdout should be valid TOML");

    assert_eq!(
        printed["instances"]["endpoint"].as_str(),
        Some("https://api.example.com/ec2/instances/")
    );
    assert_eq!(printed["instances"]["ordering"].as_str(), Some("issue"));
    assert_eq!(printed["view"]["container"].as_str(), Some("data"));
}

#[test]
fn test_env_override_beats_project_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(
        temp_dir.path(),
        r#"
[session]
cookie_name = "from-file"
"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_webui"))
        .current_dir(temp_dir.path())
        .env("WEBUI_COOKIE_NAME", "from-env")
        .arg("config")
        .output()
        .expect("Failed to execute webui");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed: toml::Value = toml::from_str(&stdout).expect("stdout should be valid TOML");
    assert_eq!(printed["session"]["cookie_name"].as_str(), Some("from-env"));
}
