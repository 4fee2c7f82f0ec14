//! End-to-end tests for the `fizzbuzz` binary.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fizzbuzz() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fizzbuzz"));
    command
        .env_remove("FIZZBUZZ_MAX")
        .env_remove("FIZZBUZZ_RULES")
        .env_remove("RUST_LOG");
    command
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout should be UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_run_prints_one_hundred_lines() {
    let output = fizzbuzz().output().expect("binary should run");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[2], "Fizz");
    assert_eq!(lines[4], "Buzz");
    assert_eq!(lines[14], "FizzBuzz");
    assert_eq!(lines[99], "Buzz");
}

#[test]
fn test_max_flag() {
    let output = fizzbuzz().args(["--max", "15"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
            "14", "FizzBuzz"
        ]
    );
}

#[test]
fn test_zero_prints_nothing() {
    let output = fizzbuzz().args(["-n", "0"]).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_negative_max_fails() {
    let output = fizzbuzz().args(["-n", "-1"]).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max number must be zero or greater"));
}

#[test]
fn test_environment_default_and_flag_override() {
    let output = fizzbuzz().env("FIZZBUZZ_MAX", "5").output().unwrap();
    assert_eq!(stdout_lines(&output), vec!["1", "2", "Fizz", "4", "Buzz"]);

    let output = fizzbuzz()
        .env("FIZZBUZZ_MAX", "5")
        .args(["--max", "2"])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output), vec!["1", "2"]);
}

#[test]
fn test_invalid_environment_value_fails() {
    let output = fizzbuzz().env("FIZZBUZZ_MAX", "many").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_rule_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(
        &path,
        r#"{"rules": [{"kind": "divisible", "divisor": 2, "label": "Even"}]}"#,
    )
    .unwrap();

    let output = fizzbuzz()
        .args(["-n", "4", "--rules"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["1", "Even", "3", "Even"]);
}

#[test]
fn test_missing_rule_file_fails() {
    let dir = tempdir().unwrap();
    let output = fizzbuzz()
        .arg("--rules")
        .arg(dir.path().join("absent.yaml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_list_rules() {
    let output = fizzbuzz().arg("--list-rules").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["15 FizzBuzz", "3 Fizz", "5 Buzz"]
    );
}
