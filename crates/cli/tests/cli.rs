//! Tests for the vapour CLI
//!
//! These spawn the built binary and check its help screens and argument
//! validation. None of them reach the network.

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vapour"))
        .args(args)
        .env_remove("VAPOUR_API_BASE_URL")
        .output()
        .expect("Failed to execute command")
}

/// Help output, normalised so that `vapour.exe` reads as `vapour`.
fn help(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(output.status.success(), "{args:?} exited with {:?}", output.status);
    String::from_utf8_lossy(&output.stdout).replace("vapour.exe", "vapour")
}

#[test]
fn test_main_help_lists_commands() {
    let output = help(&["--help"]);
    for command in ["libraries", "archives", "games", "game", "archive", "self"] {
        assert!(output.contains(command), "missing {command} in:\n{output}");
    }
    assert!(output.contains("--base-url"));
    assert!(output.contains("--config"));
}

#[test]
fn test_games_help() {
    let output = help(&["games", "--help"]);
    for flag in ["--library", "--archive", "--focus", "--gib", "--json"] {
        assert!(output.contains(flag), "missing {flag} in:\n{output}");
    }
}

#[test]
fn test_game_help_lists_kinds() {
    let output = help(&["game", "--help"]);
    assert!(output.contains("--kind"));
}

#[test]
fn test_archive_help() {
    let output = help(&["archive", "--help"]);
    assert!(output.contains("ARCHIVE_ID"));
    assert!(output.contains("APP_ID"));
}

#[test]
fn test_self_config_help() {
    let output = help(&["self", "--help"]);
    assert!(output.contains("config"));
}

#[test]
fn test_games_requires_a_collection() {
    let output = run_cli(&["games"]);
    assert!(!output.status.success());
}

#[test]
fn test_games_rejects_both_collections() {
    let output = run_cli(&["games", "--library", "1", "--archive", "2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "{stderr}");
}

#[test]
fn test_unknown_kind_is_rejected() {
    let output = run_cli(&["game", "620", "--kind", "dlc"]);
    assert!(!output.status.success());
}

#[test]
fn test_version() {
    let output = help(&["--version"]);
    assert!(output.starts_with("vapour "));
}
