//! Integration tests for the smart-trip-planner CLI

use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_smart-trip-planner"))
}

#[test]
fn test_cli_help() {
    let output = cli().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("suggest"));
}

#[test]
fn test_suggest_rejects_invalid_criteria_before_calling_model() {
    let output = cli()
        .args([
            "--config",
            "/nonexistent/smart-trip-planner.toml",
            "suggest",
            "--from",
            "2025-06-10",
            "--to",
            "2025-06-01",
            "--nationality",
            "Indian",
            "--budget",
            "0",
        ])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("End date cannot be before start date."));
    assert!(stderr.contains("Budget must be a positive number."));
}
