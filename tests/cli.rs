use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_pair(dir: &Path, stem: &str, text: &str) {
    fs::write(dir.join(format!("{stem}.txt")), text).unwrap();
    fs::write(dir.join(format!("{stem}.jpg")), [0xffu8, 0xd8]).unwrap();
}

fn pairbatch() -> Command {
    Command::cargo_bin("pairbatch").expect("Binary exists")
}

#[test]
fn organises_directory_and_prints_summary() {
    let tmp = tempdir().unwrap();
    for stem in ["a", "b", "c"] {
        write_pair(tmp.path(), stem, &format!("text {stem}"));
    }
    fs::write(tmp.path().join("d.jpg"), [0u8]).unwrap();

    pairbatch()
        .arg(tmp.path())
        .arg("--batch-size")
        .arg("2")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Created 2 batch folders")
                .and(predicate::str::contains("Total file pairs: 3"))
                .and(predicate::str::contains("Unmatched stems: 1")),
        );

    assert_eq!(
        fs::read_to_string(tmp.path().join("Batch_01/combined.txt")).unwrap(),
        "text a\nTRP_PAGEBREAK\ntext b"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("Batch_02/combined.txt")).unwrap(),
        "text c"
    );
}

#[test]
fn move_flag_and_prefix_are_honoured() {
    let tmp = tempdir().unwrap();
    write_pair(tmp.path(), "page", "body");

    pairbatch()
        .arg(tmp.path())
        .args(["--prefix", "Project", "--combined-name", "all.txt", "--move"])
        .assert()
        .success();

    assert!(!tmp.path().join("page.txt").exists());
    assert!(tmp.path().join("Project_01/page.txt").is_file());
    assert!(tmp.path().join("Project_01/page.jpg").is_file());
    assert_eq!(
        fs::read_to_string(tmp.path().join("Project_01/all.txt")).unwrap(),
        "body"
    );
}

#[test]
fn missing_directory_exits_non_zero() {
    let tmp = tempdir().unwrap();

    pairbatch()
        .arg(tmp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Directory not found"));
}

#[test]
fn zero_batch_size_exits_non_zero_without_side_effects() {
    let tmp = tempdir().unwrap();
    write_pair(tmp.path(), "a", "text a");

    pairbatch()
        .arg(tmp.path())
        .arg("--batch-size=0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid configuration: batch_size"));

    assert!(!tmp.path().join("Batch_01").exists());
}

#[test]
fn negative_batch_size_is_invalid_configuration() {
    let tmp = tempdir().unwrap();

    pairbatch()
        .arg(tmp.path())
        .args(["--batch-size", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid configuration: batch_size"));
}

#[test]
fn empty_directory_succeeds_with_notice() {
    let tmp = tempdir().unwrap();

    pairbatch()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No file pairs found"));
}

#[test]
fn report_flag_writes_json() {
    let tmp = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_pair(tmp.path(), "a", "text a");
    let report_path = out.path().join("run.json");

    pairbatch()
        .arg(tmp.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["total_pairs"], 1);
    assert!(out.path().join("Batch_01/a.txt").is_file());
}
