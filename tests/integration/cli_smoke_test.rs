//! CLI Smoke Test
//!
//! Runs the compiled binary for the failure paths that must exit non-zero
//! before any network access happens.

use std::process::Command;

fn checkup_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_super-staker-checkup"))
}

#[test]
fn test_missing_argument_fails() {
    let output = checkup_binary().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_missing_config_file_exits_non_zero() {
    let output = checkup_binary()
        .arg("/nonexistent/SSCConfigurationFile.toml")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_incomplete_config_exits_non_zero() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    std::io::Write::write_all(&mut file, b"staker_fee = 3\n").unwrap();

    let output = checkup_binary().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}

#[test]
fn test_unreachable_api_exits_non_zero() {
    let file = crate::common::write_toml_config_with_api(3, 100, "http://127.0.0.1:1/api/");

    let output = checkup_binary()
        .arg(file.path())
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Data source unavailable"));
}
