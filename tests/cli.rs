use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn converts_to_sibling_html_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "🔴 Intro\nHello **world**\n").unwrap();

    Command::cargo_bin("ebook")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").and(predicate::str::contains("notes.html")));

    let html = fs::read_to_string(dir.path().join("notes.html")).unwrap();
    assert!(html.contains("<a href=\"#section-1\">Intro</a>"));
}

#[test]
fn explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("book.html");
    fs::write(&input, "plain\n").unwrap();

    Command::cargo_bin("ebook")
        .unwrap()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn missing_input_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("ebook")
        .unwrap()
        .current_dir(dir.path())
        .arg("missing.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: missing.md"));

    assert!(!dir.path().join("missing.html").exists());
}

#[test]
fn default_invocation_uses_reference_pair() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("哲学的历程.md"), "🔴 泰勒斯\n水是万物的本原\n").unwrap();

    Command::cargo_bin("ebook")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("哲学的历程.html")).unwrap();
    assert!(html.contains("<title>电子书 - 哲学的历程.md</title>"));
    assert!(html.contains("<h2 id=\"section-1\">🔴 泰勒斯</h2>"));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let config = dir.path().join("ebook.toml");
    fs::write(&input, "## Part One\n🔴 not a section\n").unwrap();
    fs::write(
        &config,
        "[sections]\nmarker = \"## \"\nanchor_prefix = \"part-\"\n\n[page]\ntoc_heading = \"Contents\"\n",
    )
    .unwrap();

    Command::cargo_bin("ebook")
        .unwrap()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("in.html")).unwrap();
    assert!(html.contains("<h2>Contents</h2>"));
    assert!(html.contains("<a href=\"#part-1\">Part One</a>"));
    assert!(!html.contains("section-1"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let config = dir.path().join("bad.toml");
    fs::write(&input, "text\n").unwrap();
    fs::write(&config, "[sections\n").unwrap();

    Command::cargo_bin("ebook")
        .unwrap()
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));

    assert!(!dir.path().join("in.html").exists());
}
