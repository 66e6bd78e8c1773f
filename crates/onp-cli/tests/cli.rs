//! End-to-end runs of the `onp` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use onp_core::{Change, DiffStats};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn onp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_onp"))
        .args(args)
        .output()
        .expect("failed to run onp")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "onp failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn changes_by_chars_prints_records() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a", "acbdeacbed");
    let b = write(dir.path(), "b", "acebdabbabed");
    let out = stdout(&onp(&[
        "changes",
        "--unit",
        "chars",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]));
    assert_eq!(out, "2,2 -0 +1\n4,5 -1 +0\n6,6 -1 +0\n8,7 -0 +3\n");
}

#[test]
fn changes_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a", "abcd");
    let b = write(dir.path(), "b", "abc");
    let out = stdout(&onp(&[
        "--format",
        "json",
        "changes",
        "--unit",
        "bytes",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]));
    let changes: Vec<Change> = serde_json::from_str(&out).unwrap();
    assert_eq!(changes, vec![Change::new(3, 3, 1, 0)]);
}

#[test]
fn stat_counts_lines() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a", "one\ntwo\nthree\n");
    let b = write(dir.path(), "b", "one\n2\nthree\nfour\n");
    let out = stdout(&onp(&["--format", "json", "stat", a.to_str().unwrap(), b.to_str().unwrap()]));
    let stats: DiffStats = serde_json::from_str(&out).unwrap();
    assert_eq!(stats.deletions, 1);
    assert_eq!(stats.insertions, 2);
}

#[test]
fn unified_diff_without_color() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "onp.toml", "color = false\ncontext = 1\n");
    let a = write(dir.path(), "a", "a\nb\nc\nd\n");
    let b = write(dir.path(), "b", "a\nb\nX\nd\n");
    let (a, b) = (a.to_str().unwrap(), b.to_str().unwrap());
    let out = stdout(&onp(&["--config", config.to_str().unwrap(), "diff", a, b]));
    assert_eq!(
        out,
        format!("--- {a}\n+++ {b}\n@@ -2,3 +2,3 @@\n b\n-c\n+X\n d\n")
    );
}

#[test]
fn identical_files_report_no_changes() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a", "same\n");
    let b = write(dir.path(), "b", "same\n");
    let out = stdout(&onp(&["diff", a.to_str().unwrap(), b.to_str().unwrap()]));
    assert_eq!(out, "No changes.\n");
}

#[test]
fn line_endings_and_final_newline_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "onp.toml", "color = false\n");

    let a = write(dir.path(), "crlf", "x\r\ny\r\n");
    let b = write(dir.path(), "lf", "x\ny\n");
    let (a, b) = (a.to_str().unwrap(), b.to_str().unwrap());
    let out = stdout(&onp(&["--config", config.to_str().unwrap(), "diff", a, b]));
    assert_eq!(
        out,
        format!("--- {a}\n+++ {b}\n@@ -1,2 +1,2 @@\n-x\r\n-y\r\n+x\n+y\n")
    );

    let c = write(dir.path(), "open", "x\ny");
    let c = c.to_str().unwrap();
    let out = stdout(&onp(&["--config", config.to_str().unwrap(), "diff", c, b]));
    assert_eq!(
        out,
        format!("--- {c}\n+++ {b}\n@@ -1,2 +1,2 @@\n x\n-y\n\\ No newline at end of file\n+y\n")
    );
}

#[test]
fn diff_rejects_byte_unit() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a", "x");
    let out = onp(&["diff", "--unit", "bytes", a.to_str().unwrap(), a.to_str().unwrap()]);
    assert!(!out.status.success());
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a", "x");
    let missing = dir.path().join("missing");
    let out = onp(&["changes", a.to_str().unwrap(), missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read"));
}
