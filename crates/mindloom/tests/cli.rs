use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mloom() -> Command {
    let mut cmd: Command = cargo_bin_cmd!("mloom").into();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a note file into a fresh tempdir. The tempdir guard must be kept
/// alive for the duration of the test.
fn note_file(content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("note.txt");
    fs::write(&path, content).unwrap();
    (tmp, path)
}

const NOTES: &str = "Machine learning systems learn from data. \
                     Machine learning models improve with more data.";

// --- Binary startup ---

#[test]
fn binary_runs() {
    let mut cmd: Command = cargo_bin_cmd!("mloom").into();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mloom"));
}

// --- Topic ---

#[test]
fn topic_detects_heading_phrase() {
    let (_tmp, path) = note_file(NOTES);

    mloom()
        .args(["topic", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine Learning"));
}

#[test]
fn topic_reads_stdin() {
    mloom()
        .arg("topic")
        .write_stdin(NOTES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine Learning"));
}

#[test]
fn topic_falls_back_to_placeholder() {
    mloom()
        .arg("topic")
        .write_stdin("word")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Topic"));
}

// --- Keywords ---

#[test]
fn keywords_rank_most_frequent_first() {
    let (_tmp, path) = note_file(NOTES);

    mloom()
        .args(["keywords", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("machine learning\n"));
}

#[test]
fn keywords_respect_budget() {
    let (_tmp, path) = note_file(NOTES);

    let output = mloom()
        .args(["keywords", path.to_str().unwrap(), "--max-nodes", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines = String::from_utf8(output).unwrap();
    assert_eq!(lines.lines().count(), 3);
}

#[test]
fn keywords_show_counts() {
    let (_tmp, path) = note_file(NOTES);

    mloom()
        .args(["keywords", path.to_str().unwrap(), "--counts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2  machine learning"));
}

// --- Generate ---

#[test]
fn generate_emits_dot() {
    let (_tmp, path) = note_file(NOTES);

    mloom()
        .args(["generate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph mindmap {"))
        .stdout(predicate::str::contains("Machine Learning"))
        .stdout(predicate::str::contains("--"));
}

#[test]
fn generate_emits_json() {
    let (_tmp, path) = note_file(NOTES);

    mloom()
        .args(["generate", path.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"main_topic\": \"Machine Learning\""))
        .stdout(predicate::str::contains("\"topic_tier\": \"heading\""));
}

#[test]
fn generate_emits_html() {
    let (_tmp, path) = note_file(NOTES);

    mloom()
        .args(["generate", path.to_str().unwrap(), "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vis-network"))
        .stdout(predicate::str::contains("Machine Learning"));
}

#[test]
fn generate_topic_override() {
    let (_tmp, path) = note_file(NOTES);

    mloom()
        .args(["generate", path.to_str().unwrap(), "--topic", "Exam Review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exam Review"))
        .stdout(predicate::str::contains("machine learning"));
}

#[test]
fn generate_writes_output_file() {
    let (tmp, path) = note_file(NOTES);
    let out = tmp.path().join("map.dot");

    mloom()
        .args([
            "generate",
            path.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("graph mindmap {"));
}

// --- Blank input ---

#[test]
fn blank_note_is_refused() {
    let (_tmp, path) = note_file("   \n\t  ");

    mloom()
        .args(["generate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no text available"));
}
