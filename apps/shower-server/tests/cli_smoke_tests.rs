#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the shower-server binary

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

fn shower_server() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shower-server"));
    cmd.env_remove("SHOWER__AUTH__SECRET")
        .env_remove("SHOWER__SERVER__PORT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

fn run_shower_server(args: &[&str]) -> std::process::Output {
    shower_server()
        .args(args)
        .output()
        .expect("Failed to execute shower-server")
}

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_shower_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_shower_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shower-server"), "Should contain binary name");
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_shower_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_shower_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_check_valid_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "server:\n  port: 9200\nauth:\n  secret: smoke-test-secret-0123456789\n  ttl: 1h\n",
    );

    let output = run_shower_server(&["--config", &path, "check"]);

    assert!(
        output.status.success(),
        "Check should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("9200"));
    assert!(
        !stdout.contains("smoke-test-secret"),
        "Secret must not be printed"
    );
}

#[test]
fn test_cli_check_rejects_bad_ttl() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "auth:\n  ttl: whenever\n");

    let output = run_shower_server(&["--config", &path, "check"]);

    assert!(!output.status.success(), "Invalid ttl should fail check");
}

#[test]
fn test_cli_check_rejects_unknown_keys() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rsvp:\n  max_len: 10\n");

    let output = run_shower_server(&["--config", &path, "check"]);

    assert!(!output.status.success(), "Unknown key should fail check");
}

#[test]
fn test_cli_check_rejects_oversized_name_limit() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rsvp:\n  max_name_length: 300\n");

    let output = run_shower_server(&["--config", &path, "check"]);

    assert!(
        !output.status.success(),
        "Name limit wider than the columns should fail check"
    );
}

#[test]
fn test_cli_print_config_applies_overrides() {
    let output = shower_server()
        .args(["--print-config", "--port", "9301", "--mock"])
        .env("SHOWER__RSVP__MAX_NAME_LENGTH", "60")
        .output()
        .expect("Failed to execute shower-server");

    assert!(output.status.success());
    let cfg: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("print-config emits JSON on stdout");
    assert_eq!(cfg["server"]["port"], 9301);
    assert_eq!(cfg["database"]["url"], "sqlite::memory:");
    assert_eq!(cfg["rsvp"]["max_name_length"], 60);
}

#[tokio::test]
async fn test_cli_mock_run_keeps_serving() {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_shower-server"));
    cmd.args(["--mock", "--port", "0", "run"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    let child = cmd.spawn().expect("Failed to spawn shower-server");

    // A healthy server is still running when the timeout fires.
    let result = timeout(Duration::from_secs(3), child.wait_with_output()).await;
    if let Ok(output) = result {
        let output = output.unwrap();
        panic!(
            "Server exited early: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
