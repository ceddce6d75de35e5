//! End-to-end checks of the fatal exit path.
//!
//! The test harness never gives the binary a terminal, so raw mode can't be
//! entered and every run below ends in `die`: screen cleared, cursor homed,
//! a diagnostic on stderr, exit status 1.

#![cfg(unix)]

use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

const CLEAR_AND_HOME: &[u8] = b"\x1b[2J\x1b[H";

fn run_kilo(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kilo"))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn no_terminal_is_fatal() {
    let out = run_kilo(&[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.starts_with(CLEAR_AND_HOME), "stdout: {:?}", out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("kilo: "), "stderr: {stderr}");
    assert!(stderr.contains("tcgetattr"), "stderr: {stderr}");
}

#[test]
fn fatal_exit_writes_nothing_but_the_clear() {
    let out = run_kilo(&[]);
    assert_eq!(out.stdout, CLEAR_AND_HOME.to_vec());
}

#[test]
fn missing_file_run_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let out = run_kilo(&[&missing]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.starts_with(CLEAR_AND_HOME));
    assert!(!out.stderr.is_empty());
}

#[test]
fn existing_file_without_terminal_exits_with_one() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"hello\n").unwrap();

    let out = run_kilo(&[file.path()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.starts_with(CLEAR_AND_HOME));
}
