//! End-to-end tests for the denormalize binary.
//!
//! These write small synthetic game files to a temporary directory and run
//! the compiled binary against them.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_denormalize"))
        .args(args)
        .env_remove("DENORMALIZE_ENCODING")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_lang(dir: &Path) -> String {
    // slots [8, 0], strings "A" (indexed) and "B" (orphan)
    let mut data = vec![8, 0, 0, 0, 0, 0, 0, 0];
    data.extend_from_slice(b"A\0B\0");
    let path = dir.join("LANG.DAT");
    fs::write(&path, data).unwrap();
    path.to_string_lossy().into_owned()
}

fn write_sfx(dir: &Path) -> String {
    let mut data = Vec::new();
    data.extend_from_slice(b"0XFS");
    for value in [1u32, 28, 24, 12, 40, 7] {
        data.extend_from_slice(&value.to_le_bytes());
    }
    for value in [47u32, 5, 1] {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(b"AB\0C\0");
    data.extend_from_slice(&[1, 2, 3, 4, 5]);

    let path = dir.join("EUREKA0.SFX");
    fs::write(&path, data).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_no_action_fails() {
    let output = run(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_xlang_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lang(dir.path());

    let output = run(&["--xlang", &path, "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["indexed_strings"][0]["text"], "A");
    assert_eq!(json["orphan_strings"][0]["text"], "B");
    assert_eq!(json["unused_slots"][0], 1);
}

#[test]
fn test_xlang_console() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lang(dir.path());

    let output = run(&["--xlang", &path]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("1 indexed, 1 orphan, 1 unused slots"));
}

#[test]
fn test_xsfx_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sfx(dir.path());

    let output = run(&["--xsfx", &path, "--json", "--verify-magic", "--strict"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sound_objects"][0]["short_name"], "AB");
    assert_eq!(json["sound_objects"][0]["long_name"], "C");
    assert_eq!(json["sound_objects"][0]["size"], 5);
}

#[test]
fn test_xsfx_bad_magic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("NOT.SFX");
    fs::write(&path, [0u8; 32]).unwrap();

    let output = run(&["--xsfx", path.to_str().unwrap(), "--verify-magic"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not a valid SFX file"));
}

#[test]
fn test_identify_unknown_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lang(dir.path());

    let output = run(&["--identify", &path]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("File:          LANG.DAT"));
    assert!(stdout.contains("This is not a known version of Normality."));
}

#[test]
fn test_identify_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["--identify", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lang(dir.path());

    let output = run(&["--xlang", &path, "--encoding", "utf-16"]);
    assert!(!output.status.success());
}
