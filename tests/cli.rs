//! End-to-end tests for the `lockstamp` CLI commands.

use lockstamp::exit_codes;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lockstamp"))
        .args(args)
        .output()
        .expect("failed to run lockstamp")
}

fn put(file: &Path, payload: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lockstamp"))
        .args(["put", file.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lockstamp put");
    child.stdin.take().unwrap().write_all(payload).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn put_then_cat_roundtrips_payload() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("users.tbl");

    let output = put(&data, b"alice\nbob\n");
    assert!(output.status.success());
    assert!(temp_dir.path().join("users.tbl.stamp").exists());

    let output = run(&["cat", data.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"alice\nbob\n");
}

#[test]
fn cat_missing_file_is_lock_failure() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("missing.tbl");

    let output = run(&["cat", data.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(exit_codes::LOCK_FAILURE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to open"));
}

#[test]
fn check_reports_modification_through_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let sentinel = temp_dir.path().join("users.tbl.stamp");
    let sentinel = sentinel.to_str().unwrap();

    let first = stdout(&run(&["stamp", sentinel]));

    // Nothing accepted yet
    let output = run(&["check", sentinel]);
    assert_eq!(output.status.code(), Some(exit_codes::MODIFIED));
    assert_eq!(stdout(&output), first);

    let output = run(&["check", sentinel, "--since", &first]);
    assert_eq!(output.status.code(), Some(exit_codes::SUCCESS));

    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = stdout(&run(&["stamp", sentinel]));
    assert!(second > first);

    let output = run(&["check", sentinel, "--since", &first]);
    assert_eq!(output.status.code(), Some(exit_codes::MODIFIED));
    assert_eq!(stdout(&output), second);
}

#[test]
fn inspect_json_reports_stamp() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("users.tbl");
    let stamp = stdout(&put(&data, b"alice\n"));

    let output = run(&["inspect", data.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["exists"], true);
    assert_eq!(report["sentinel_exists"], true);
    assert_eq!(report["stamp"], stamp.as_str());
    assert!(report["stamped_at"].is_string());
}

#[test]
fn inspect_without_sentinel_omits_stamp() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("users.tbl");
    std::fs::write(&data, b"alice\n").unwrap();

    let output = run(&["inspect", data.to_str().unwrap(), "--json"]);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["sentinel_exists"], false);
    assert!(report.get("stamp").is_none());
}

#[test]
fn rm_removes_file_and_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("users.tbl");
    assert!(put(&data, b"alice\n").status.success());

    let output = run(&["rm", data.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(!data.exists());
    assert!(!temp_dir.path().join("users.tbl.stamp").exists());

    let output = run(&["rm", data.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(exit_codes::USER_ERROR));
}

#[test]
fn config_suffix_names_the_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("lockstamp.yaml");
    std::fs::write(&config, "stamp_suffix: \".ts\"\nsync_on_write: false\n").unwrap();
    let data = temp_dir.path().join("users.tbl");

    let mut child = Command::new(env!("CARGO_BIN_EXE_lockstamp"))
        .args(["--config", config.to_str().unwrap(), "put", data.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"alice\n").unwrap();
    assert!(child.wait().unwrap().success());

    assert!(temp_dir.path().join("users.tbl.ts").exists());
    assert!(!temp_dir.path().join("users.tbl.stamp").exists());
}

#[test]
fn invalid_config_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("lockstamp.yaml");
    std::fs::write(&config, "stamp_suffix: \"\"\n").unwrap();

    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "cat",
        "users.tbl",
    ]);
    assert_eq!(output.status.code(), Some(exit_codes::CONFIG_ERROR));
}
