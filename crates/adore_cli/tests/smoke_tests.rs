//! CLI smoke tests: basic binary behavior.
//!
//! Every run forces the offline lexicon provider so no network or API key
//! is needed.

use std::io::Write;
use std::process::Command;

fn cli_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_adore"));
    cmd.env("LLM_PROVIDER", "lexicon").env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_help_flag() {
    let output = cli_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage"),
        "Expected usage info in --help output"
    );
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("batch"));
}

#[test]
fn test_version_flag() {
    let output = cli_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("adore"), "Expected name in --version output");
}

#[test]
fn test_analyze_prints_json() {
    let output = cli_bin()
        .args(["--config", "/tmp/nonexistent_adore_config_12345.toml"])
        .args(["analyze", "I love this product, it exceeded all expectations!"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["dominant"], "joy");
    assert_eq!(value["scores"].as_object().unwrap().len(), 8);
    assert!(value["adore_score"].as_f64().unwrap() >= 0.85);
}

#[test]
fn test_analyze_blank_is_noop() {
    let output = cli_bin()
        .args(["analyze", "   "])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter some feedback"));
}

#[test]
fn test_unknown_provider_fails_cleanly() {
    let output = cli_bin()
        .env("LLM_PROVIDER", "nonsense")
        .args(["analyze", "hello"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown LLM provider"));
}

#[test]
fn test_malformed_config_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[gateway\nport = ").unwrap();
    let output = cli_bin()
        .arg("--config")
        .arg(file.path())
        .args(["analyze", "hello"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse TOML config"), "{}", stderr);
}

#[test]
fn test_analyze_with_separate_approach() {
    let output = cli_bin()
        .args(["analyze", "--approach", "separate", "Wonderful, I love it"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["approach"], "separate");
    assert_eq!(value["dominant"], "joy");
}
