//! End-to-end tests of the algodex binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn highlight_emits_html_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(&dir, "demo.cpp", "int main() { return 0; }\n");

    let mut cmd = Command::cargo_bin("algodex").unwrap();
    cmd.arg("highlight").arg(&fixture);

    let output_pred = predicate::str::contains("<span class=\"code-keyword\">int</span>")
        .and(predicate::str::contains("<span class=\"code-function\">main</span>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn highlight_emits_token_json() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(&dir, "demo.cpp", "return 42;\n");

    let mut cmd = Command::cargo_bin("algodex").unwrap();
    cmd.arg("highlight").arg(&fixture).arg("--format").arg("tokens-json");

    let output_pred =
        predicate::str::contains("\"keyword\"").and(predicate::str::contains("\"number\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn highlight_rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(&dir, "demo.cpp", "int x;\n");

    let mut cmd = Command::cargo_bin("algodex").unwrap();
    cmd.arg("highlight").arg(&fixture).arg("--format").arg("latex");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn highlight_reports_missing_file() {
    let mut cmd = Command::cargo_bin("algodex").unwrap();
    cmd.arg("highlight").arg("no/such/file.cpp");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn list_prints_categories_and_entries() {
    let mut cmd = Command::cargo_bin("algodex").unwrap();
    cmd.arg("list");

    let output_pred = predicate::str::contains("Sorting Algorithms")
        .and(predicate::str::contains("bubble-sort"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn list_rejects_unknown_category() {
    let mut cmd = Command::cargo_bin("algodex").unwrap();
    cmd.arg("list").arg("--category").arg("quantum");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn build_writes_site_tree() {
    let out = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("algodex").unwrap();
    cmd.arg("build").arg("--out").arg(out.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert!(out.path().join("index.html").is_file());
    assert!(out.path().join("algorithms/bubble-sort.html").is_file());
}
