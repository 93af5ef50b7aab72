use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn graph_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn prints_unreachable_keys_sorted() {
    let (_dir, path) = graph_file(
        r#"{"home": ["work"], "work": [], "zoo": ["cabin"], "cabin": [], "attic": []}"#,
    );
    cargo_bin_cmd!("unreachable_report")
        .arg(&path)
        .arg("home")
        .assert()
        .success()
        .stdout("attic\ncabin\nzoo\n");
}

#[test]
fn start_missing_from_map_prints_every_key() {
    let (_dir, path) = graph_file(r#"{"b": ["a"], "a": []}"#);
    cargo_bin_cmd!("unreachable_report")
        .arg(&path)
        .arg("nowhere")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn missing_arguments_fail_with_usage() {
    cargo_bin_cmd!("unreachable_report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: unreachable_report"));
}

#[test]
fn unreadable_file_fails_with_context() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    cargo_bin_cmd!("unreachable_report")
        .arg(&path)
        .arg("home")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("reading {}", path.display())));
}

#[test]
fn malformed_json_fails_with_context() {
    let (_dir, path) = graph_file(r#"{"home": "work"}"#);
    cargo_bin_cmd!("unreachable_report")
        .arg(&path)
        .arg("home")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains(format!("parsing {}", path.display()))
                .and(predicate::str::contains("invalid adjacency map")),
        );
}
