use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_showdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let assert = cmd().write_stdin(fixture("button.rs")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // Module docs come first, then index, then declarations in source order.
    assert!(output.contains("Showcase widgets for the demo gallery."));
    assert!(output.contains("## Index\n\n* [Button](#button)\n* [new](#new)\n"));
    assert!(output.contains("### Button"));

    // The reconstructed comment keeps declaration order: prose, code,
    // callout, list.
    let prose = output.find("A customizable button.").unwrap();
    let code = output.find("Button::new(\"Tap\")").unwrap();
    let warning = output.find("> **Warning:** Destructive action").unwrap();
    let list = output.find("* First consideration").unwrap();
    assert!(prose < code && code < warning && warning < list);

    // A lone code block is titled without a number.
    assert!(output.contains("#### Example\n"));
    assert!(!output.contains("#### Example 1"));
}

#[test]
fn stdin_mode_parameters_and_returns() {
    let assert = cmd().write_stdin(fixture("button.rs")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("#### Parameters\n\n* **label**: The visible text\n"));
    assert!(output.contains("#### Returns\n\na new button\n"));
}

#[test]
fn stdin_mode_skips_private_by_default() {
    let assert = cmd().write_stdin(fixture("button.rs")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!output.contains("invalidate"));
}

#[test]
fn stdin_mode_include_private() {
    let assert = cmd()
        .arg("--include-private")
        .write_stdin(fixture("button.rs"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("### invalidate"));
    assert!(output.contains("*`private`*"));
}

#[test]
fn stdin_mode_title_flag() {
    let assert = cmd()
        .args(["--title", "Widgets"])
        .write_stdin(fixture("button.rs"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("# Widgets\n"));
}

#[test]
fn multiple_examples_are_numbered() {
    let assert = cmd().write_stdin(fixture("gallery.rs")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let first = output.find("#### Example 1").unwrap();
    let second = output.find("#### Example 2").unwrap();
    assert!(first < second);
    assert!(output.contains("> **Tip:** square cells look best"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("button.rs"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("button.md")).unwrap();
    assert!(output.starts_with("# button\n"));
    assert!(output.contains("### Button"));
}

#[test]
fn file_mode_multiple_files() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("button.rs"))
        .arg(fixture_path("gallery.rs"))
        .assert()
        .success();

    assert!(dir.path().join("button.md").exists());
    assert!(dir.path().join("gallery.md").exists());
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("button.rs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_skips_undocumented_file() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("bare.rs");
    std::fs::write(&src, "pub fn undocumented() {}\n").unwrap();
    let out = TempDir::new().unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(src.to_str().unwrap())
        .assert()
        .success();

    assert!(!out.path().join("bare.md").exists());
}

// -- output formats --

#[test]
fn file_mode_html_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "html"])
        .arg(fixture_path("button.rs"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("button.html")).unwrap();
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("<aside class=\"warning\""));
}

#[test]
fn file_mode_json_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("button.rs"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("button.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["declarations"][0]["name"], "Button");
    assert_eq!(
        value["declarations"][0]["content"]["items"][1]["title"],
        "Example"
    );
}

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .arg(fixture_path("button.rs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn stdin_json_format() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(fixture("button.rs"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("\"declarations\""));
}
