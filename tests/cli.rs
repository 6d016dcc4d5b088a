//! Integration tests for the command-line interface

use assert_cmd::Command;
use predicates::prelude::*;
use std::{
    fs,
    io::{BufRead, BufReader},
    process::Stdio,
};
use tempfile::TempDir;

/// Write `contents` to a config file inside a fresh temporary directory
fn config_file(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foobar.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn default_run_prints_hundred_lines() {
    let output = Command::cargo_bin("foobar")
        .unwrap()
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[2], "Foo");
    assert_eq!(lines[4], "Bar");
    assert_eq!(lines[14], "FooBar");
    assert_eq!(lines[29], "FooBar");
    assert_eq!(lines[99], "Bar");
}

#[test]
fn flag_overrides_config_file() {
    let (_dir, path) = config_file("end = 5");
    Command::cargo_bin("foobar")
        .unwrap()
        .arg("-c")
        .arg(&path)
        .arg("--end")
        .arg("3")
        .assert()
        .success()
        .stdout("1\n2\nFoo\n");
}

#[test]
fn config_file_overrides_defaults() {
    let (_dir, path) = config_file("end = 5\n[[rules]]\ndivisor = 2\nlabel = \"Even\"");
    Command::cargo_bin("foobar")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("1\nEven\n3\nEven\n5\n");
}

#[test]
fn inverted_range_prints_nothing() {
    Command::cargo_bin("foobar")
        .unwrap()
        .args(["--start", "10", "--end", "9"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_config_fails() {
    Command::cargo_bin("foobar")
        .unwrap()
        .args(["-c", "/nonexistent/foobar.toml"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to load configuration"))
        .stderr(predicate::str::contains("/nonexistent/foobar.toml"));
}

#[test]
fn empty_combined_label_fails() {
    let (_dir, path) = config_file("combined = \"\"");
    Command::cargo_bin("foobar")
        .unwrap()
        .arg("-c")
        .arg(&path)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid divisor rules"))
        .stderr(predicate::str::contains("combined label is empty"))
        .stderr(predicate::str::contains("rule #").not());
}

#[test]
fn zero_divisor_fails() {
    let (_dir, path) = config_file("[[rules]]\ndivisor = 0\nlabel = \"Zero\"");
    Command::cargo_bin("foobar")
        .unwrap()
        .arg("-c")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rule #0 has a zero divisor"));
}

#[test]
fn closed_stdout_is_success() {
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("foobar"))
        .args(["--start", "0", "--end", &u64::MAX.to_string()])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut first = String::new();
    stdout.read_line(&mut first).unwrap();
    assert_eq!(first, "FooBar\n");
    drop(stdout);

    let status = child.wait().unwrap();
    assert!(status.success(), "exited with {status}");
}
