//! Command-line behaviour of the `sarview` binary up to terminal setup.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with a private config so logs land in the temp dir.
fn sarview(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    let log_dir = dir.path().join("logs");
    std::fs::write(&config, format!("log_dir = {:?}\n", log_dir.display().to_string())).unwrap();

    let mut cmd = Command::cargo_bin("sarview").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn write_report(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("report.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_flag_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    sarview(&dir)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn parse_failure_prints_error_and_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(
        dir.path(),
        "Linux 5.15.0 (host)\n\n02:00:01 PM CPU %usr\n02:00:02 PM all\n",
    );

    sarview(&dir)
        .arg("-f")
        .arg(&report)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("1 values but header has 2 columns"));
}

#[test]
fn unreadable_file_prints_error_and_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    sarview(&dir)
        .arg("--file")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to load"));
}
