use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_parse_robot_from_stdin() -> Result<()> {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    let output = cmd
        .args(["--robot", "--quiet", "parse"])
        .write_stdin("Intro.\n\n1) Q?\nA) yes\nB) no\nAnswer: A\n")
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["intro"], "Intro.");
    let questions = json["data"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["correctLabel"], "A");
    Ok(())
}

#[test]
fn test_parse_human_summary() {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    cmd.args(["--quiet", "parse"])
        .write_stdin("1) Q?\nA) yes\nB) no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MCQ set"))
        .stdout(predicate::str::contains("A) yes"));
}

#[test]
fn test_trim_writes_trimmed_text_to_stdout() {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    cmd.args(["--quiet", "trim", "--max", "1"])
        .write_stdin("Intro.\n\n1) One?\nA) a\n\n2) Two?\nB) b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) One?"))
        .stdout(predicate::str::contains("2) Two?").not());
}

#[test]
fn test_trim_roundtrip_through_files() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("quiz.txt");
    let output = dir.path().join("trimmed.txt");
    std::fs::write(&input, "1) One?\nA) a\n\n2) Two?\nB) b\n")?;

    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    cmd.args(["--quiet", "trim", "--max", "1", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let trimmed = std::fs::read_to_string(&output)?;
    assert_eq!(trimmed, "1) One?\nA) a");
    Ok(())
}

#[test]
fn test_trim_robot_reports_counts() -> Result<()> {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    let output = cmd
        .args(["--robot", "--quiet", "trim", "--max", "1"])
        .write_stdin("1) One?\nA) a\n\n2) Two?\nB) b\n")
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["kept"], 1);
    assert_eq!(json["data"]["changed"], true);
    Ok(())
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    cmd.args(["--quiet", "parse", "/nonexistent/quiz.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_robot_error_envelope() -> Result<()> {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    let output = cmd
        .args(["--robot", "--quiet", "parse", "/nonexistent/quiz.txt"])
        .output()?;
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["status"]["error"]["code"], "error");
    assert!(
        json["status"]["error"]["message"]
            .as_str()
            .unwrap()
            .contains("I/O error")
    );
    Ok(())
}

#[test]
fn test_completions_generate() {
    let mut cmd = Command::cargo_bin("mcqx").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mcqx"));
}
