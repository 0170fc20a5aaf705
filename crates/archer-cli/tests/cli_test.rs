//! Integration tests for the `archerctl` binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! error exit codes — all without a live router.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `archerctl` binary with env isolation so
/// tests never pick up the user's real router settings.
fn archerctl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("archerctl").unwrap();
    cmd.env_remove("ARCHER_URL")
        .env_remove("ARCHER_USER")
        .env_remove("ARCHER_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = archerctl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    archerctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Archer C9")
            .and(predicate::str::contains("reboot"))
            .and(predicate::str::contains("list")),
    );
}

#[test]
fn test_version_flag() {
    archerctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("archerctl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    archerctl_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Validation errors ───────────────────────────────────────────────

#[test]
fn test_invalid_url_exits_with_usage_code() {
    let output = archerctl_cmd()
        .args(["list", "wired", "--url", "not a url"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("invalid value for url"));
}

#[test]
fn test_empty_password_exits_with_usage_code() {
    let output = archerctl_cmd()
        .args(["list", "wireless", "--url", "http://127.0.0.1:1", "-P", ""])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
}

// ── Transport errors ────────────────────────────────────────────────

#[test]
fn test_unreachable_router_exits_with_connection_code() {
    let output = archerctl_cmd()
        .args(["list", "wired", "--url", "http://127.0.0.1:1", "--timeout", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("could not reach the router"));
}

#[test]
fn test_reboot_yes_unreachable_router() {
    let output = archerctl_cmd()
        .args(["reboot", "--yes", "--url", "http://127.0.0.1:1", "--timeout", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}
