//! Integration tests for CLI commands.

use std::process::Command;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_numassert"))
        .args(args)
        .output()
        .expect("Failed to run CLI");

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_normalize_command() {
    let (success, stdout, _) = run_cli(&["normalize", "u256:000123"]);
    assert!(success);
    assert_eq!(stdout.trim(), "123");
}

#[test]
fn test_normalize_hex_requires_flag() {
    let (success, _, stderr) = run_cli(&["normalize", "0xff"]);
    assert!(!success);
    assert!(stderr.contains("Error:"));

    let (success, stdout, _) = run_cli(&["normalize", "--hex", "0xff"]);
    assert!(success);
    assert_eq!(stdout.trim(), "255");
}

#[test]
fn test_normalize_json_output() {
    let (success, stdout, _) = run_cli(&["normalize", "--json", "big:-42"]);
    assert!(success);
    let document: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(document["value"], "-42");
    assert_eq!(document["type"], "bigint");
}

#[test]
fn test_check_passes() {
    let (success, stdout, _) = run_cli(&["check", "gt", "big:100", "50"]);
    assert!(success);
    assert!(stdout.starts_with("ok"));
}

#[test]
fn test_check_failure_exit_code() {
    let (success, stdout, _) = run_cli(&["check", "gt", "big:100", "150"]);
    assert!(!success);
    assert!(stdout.contains("Expected \"100\" to be greater than 150"));
}

#[test]
fn test_check_negated_and_negative_operands() {
    let (success, _, _) = run_cli(&["check", "--not", "lt", "i256:-2", "-10"]);
    assert!(success);

    let (success, stdout, _) = run_cli(&["check", "--not", "within", "big:15", "10", "20"]);
    assert!(!success);
    assert!(stdout.contains("NOT to be within [10,20]"));
}

#[test]
fn test_check_json_output() {
    let (success, stdout, _) = run_cli(&["check", "--json", "closeTo", "big:100", "103", "2"]);
    assert!(!success);
    let document: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(document["passed"], false);
    assert_eq!(document["outcome"]["expected"], "A number between 101 and 105");
}

#[test]
fn test_check_type_error() {
    let (success, _, stderr) = run_cli(&["check", "equal", "big:1", "true"]);
    assert!(!success);
    assert!(stderr.contains("cannot convert boolean"));
}

#[test]
fn test_check_falls_through_for_plain_values() {
    let (success, stdout, _) = run_cli(&["check", "equal", "abc", "abd"]);
    assert!(!success);
    assert!(stdout.contains("expected 'abc' to equal 'abd'"));
}
