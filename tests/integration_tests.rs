//! Integration tests for end-to-end word counting.
//!
//! These tests run the whole pipeline, from reading a file on disk through
//! tokenizing and counting to the written report.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use words_counter::{config::Config, run};

fn run_on(contents: &[u8]) -> (usize, String) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    fs::write(&config.input, contents).unwrap();

    let mut out = Vec::new();
    let lines = run(&config, &mut out).unwrap();
    (lines, String::from_utf8(out).unwrap())
}

#[test]
fn test_run_sentences() {
    let (lines, output) = run_on(b"The quick fox.\nTHE FOX jumps!\n");

    assert_eq!(lines, 4);
    assert_eq!(output, "fox: 2\njumps: 1\nquick: 1\nthe: 2\n");
}

#[test]
fn test_run_numbers_and_underscores() {
    let (_, output) = run_on(b"foo_bar 123 foo_bar");

    assert_eq!(output, "123: 1\nfoo_bar: 2\n");
}

#[test]
fn test_run_empty_file() {
    let (lines, output) = run_on(b"");

    assert_eq!(lines, 0);
    assert!(output.is_empty());
}

#[test]
fn test_run_windows_line_endings() {
    let (_, output) = run_on(b"Cat cat\r\nCAT dog\r\n");

    assert_eq!(output, "cat: 3\ndog: 1\n");
}

#[test]
fn test_run_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    fs::write(&config.input, "one two three\ntwo three\nthree\n").unwrap();

    let mut first = Vec::new();
    let mut second = Vec::new();
    run(&config, &mut first).unwrap();
    run(&config, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), "one: 1\nthree: 3\ntwo: 2\n");
}

#[test]
fn test_run_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());

    let mut out = Vec::new();
    let error = run(&config, &mut out).unwrap_err();

    assert_eq!(error.get_error_name(), "FileAccessError");
    assert_eq!(error.get_position().1.as_path(), config.input.as_path());
    assert!(out.is_empty());
}

#[test]
fn test_run_invalid_utf8_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_input(dir.path().join("latin1.txt"));
    fs::write(&config.input, b"plain words first\ncaf\xe9 au lait\n").unwrap();

    let mut out = Vec::new();
    let error = run(&config, &mut out).unwrap_err();

    assert_eq!(error.get_error_name(), "DecodingError");
    assert_eq!(error.get_position().0, 2);
    assert!(out.is_empty());
}

#[test]
fn test_run_directory_is_not_readable() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_input(dir.path());

    let mut out = Vec::new();
    let error = run(&config, &mut out).unwrap_err();

    assert_eq!(error.get_error_name(), "FileAccessError");
    assert!(out.is_empty());
}

#[test]
fn test_config_points_at_input_txt() {
    let config = Config::in_dir("/srv/reports");

    assert_eq!(config.input, Path::new("/srv/reports/input.txt"));
}

fn words_counter(args: &[&Path]) -> Output {
    run_binary(Path::new(env!("CARGO_BIN_EXE_words-counter")), args)
}

/// Runs `binary`, retrying while a freshly copied executable is still busy.
fn run_binary(binary: &Path, args: &[&Path]) -> Output {
    const ETXTBSY: i32 = 26;

    for _ in 0..20 {
        match Command::new(binary).args(args).env_remove("RUST_LOG").output() {
            Err(err) if err.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(std::time::Duration::from_millis(50))
            }
            result => return result.unwrap(),
        }
    }

    panic!("{} stayed busy", binary.display());
}

#[test]
fn test_binary_reports_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("story.txt");
    fs::write(&input, "The quick fox.\nTHE FOX jumps!\n").unwrap();

    let output = words_counter(&[input.as_path()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "fox: 2\njumps: 1\nquick: 1\nthe: 2\n"
    );
}

#[test]
fn test_binary_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.txt");

    let output = words_counter(&[input.as_path()]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("FileAccessError"));
    assert!(stderr.contains(&input.display().to_string()));
}

#[test]
fn test_binary_invalid_utf8_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.txt");
    fs::write(&input, b"caf\xe9\n").unwrap();

    let output = words_counter(&[input.as_path()]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("DecodingError"));
    assert!(stderr.contains(&format!("{}:1", input.display())));
}

#[test]
#[cfg(unix)]
fn test_binary_reads_input_next_to_executable() {
    let dir = tempfile::tempdir().unwrap();
    let binary: PathBuf = dir.path().join("words-counter");
    fs::copy(env!("CARGO_BIN_EXE_words-counter"), &binary).unwrap();
    fs::write(dir.path().join("input.txt"), "foo_bar 123 foo_bar\n").unwrap();

    let output = run_binary(&binary, &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "123: 1\nfoo_bar: 2\n");
}

#[test]
#[cfg(unix)]
fn test_binary_without_input_next_to_executable_fails() {
    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("words-counter");
    fs::copy(env!("CARGO_BIN_EXE_words-counter"), &binary).unwrap();

    let output = run_binary(&binary, &[]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("FileAccessError"));
    assert!(stderr.contains("input.txt"));
}
