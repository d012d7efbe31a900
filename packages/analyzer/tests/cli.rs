use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contractlens() -> Command {
    let mut cmd = cargo_bin_cmd!("contractlens");
    for var in [
        "GOOGLE_API_KEY",
        "LLM_MODEL",
        "LLM_FAST_MODEL",
        "LLM_CAPABLE_MODEL",
        "CONTRACT_MAX_WORDS",
        "CONTRACT_LONG_THRESHOLD",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_samples_lists_bundled_contracts() {
    contractlens()
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("example"))
        .stdout(predicate::str::contains("risky"))
        .stdout(predicate::str::contains("minimal"));
}

#[test]
fn test_info_for_sample_needs_no_api_key() {
    contractlens()
        .args(["info", "--sample", "example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word count:"))
        .stdout(predicate::str::contains("/ 5000"))
        .stdout(predicate::str::contains("gemini-3-flash-preview"));
}

#[test]
fn test_info_for_file_routes_long_contract() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("long.txt");
    std::fs::write(&path, vec!["word"; 3600].join(" ")).expect("write");

    contractlens()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3600 / 5000"))
        .stdout(predicate::str::contains("gemini-3-pro-preview"))
        .stdout(predicate::str::contains("Long context: yes"));
}

#[test]
fn test_info_reports_oversized_contract() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("huge.txt");
    std::fs::write(&path, vec!["word"; 5001].join(" ")).expect("write");

    contractlens()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("not valid for analysis"));
}

#[test]
fn test_missing_file_fails() {
    contractlens()
        .args(["info", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_analyze_without_api_key_fails() {
    contractlens()
        .args(["analyze", "--sample", "minimal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_API_KEY"));
}

#[test]
fn test_analyze_empty_file_fails_before_network() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "   \n").expect("write");

    contractlens()
        .env("GOOGLE_API_KEY", "test-key")
        .env("LLM_API_BASE_URL", "http://127.0.0.1:9")
        .args(["analyze", "--format", "json"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}
