use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tabplot"))
        .stdout(predicate::str::contains("--no-window"));
}

#[test]
fn snapshot_only_run_writes_one_file_per_column() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", &fixture("input.csv"), "-m", "histogram", "--no-window", "-o"])
        .arg(&out)
        .args(["0", "2"]);
    cmd.assert().success();
    assert!(dir.path().join("out_0.png").is_file());
    assert!(dir.path().join("out_2.png").is_file());
    assert!(!out.exists());
}

#[test]
fn upper_case_mode_spelling_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("s.png");
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", &fixture("input.csv"), "-m", "SCATTER_PLOT", "--no-window", "-o"])
        .arg(&out)
        .args(["1", "2"]);
    cmd.assert().success();
    assert!(dir.path().join("s_1_2.png").is_file());
}

#[test]
fn negative_column_is_skipped_and_the_clean_one_saved() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", &fixture("negative.csv"), "--no-window", "-o"])
        .arg(dir.path().join("neg.png"))
        .args(["0", "1"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("negative value"));
    assert!(!dir.path().join("neg_0.png").exists());
    assert!(dir.path().join("neg_1.png").is_file());
}

#[test]
fn negative_value_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", &fixture("negative.csv"), "--no-window", "-o"])
        .arg(dir.path().join("neg.png"))
        .arg("0");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("negative value"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn scatter_with_three_columns_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", &fixture("input.csv"), "-m", "scatter-plot", "--no-window", "-o"])
        .arg(dir.path().join("s.png"))
        .args(["0", "1", "2"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exactly 2 columns"));
}

#[test]
fn one_bad_column_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", &fixture("input.csv"), "--no-window", "-o"])
        .arg(dir.path().join("p.png"))
        .args(["1", "7"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("out of range"));
    assert!(dir.path().join("p_1.png").is_file());
    assert!(!dir.path().join("p_7.png").exists());
}

#[test]
fn no_window_without_output_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", &fixture("input.csv"), "--no-window", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn missing_input_fails_before_any_chart() {
    let mut cmd = Command::cargo_bin("tabplot").unwrap();
    cmd.args(["-i", "does-not-exist.csv", "--no-window", "-o", "x.png", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing file"));
}
