//! Binary-level tests: sinks and exit statuses.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stamp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stamp").unwrap();
    cmd.current_dir(dir.path()).env_remove("STAMP_SEPARATOR");
    cmd
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("card.j2"),
        "{{ name }}:{% for t in tags %}{{ t }};{% endfor %}",
    )
    .unwrap();
    fs::write(dir.path().join("card.map"), "name·Ada\ntags·red·green·blue\nx\nab\n").unwrap();
    dir
}

#[test]
fn test_stdout_sink() {
    let dir = fixture();
    stamp(&dir)
        .args(["--stdout", "--map", "card.map", "card.j2"])
        .assert()
        .success()
        .stdout("Ada:red;green;blue;");
}

#[test]
fn test_file_sink_uses_template_name() {
    let dir = fixture();
    stamp(&dir)
        .args(["-m", "card.map", "card.j2"])
        .assert()
        .success()
        .stdout("");

    let out = fs::read_to_string(dir.path().join("card.html")).unwrap();
    assert_eq!(out, "Ada:red;green;blue;");
}

#[test]
fn test_file_sink_with_output_override() {
    let dir = fixture();
    stamp(&dir)
        .args(["-m", "card.map", "-o", "custom.txt", "card.j2"])
        .assert()
        .success();

    assert!(dir.path().join("custom.txt").exists());
    assert!(!dir.path().join("card.html").exists());
}

#[test]
fn test_html_template_is_not_overwritten() {
    let dir = fixture();
    fs::write(dir.path().join("page.html"), "<p>{{ name }}</p>").unwrap();
    stamp(&dir)
        .args(["--set", "name·Ada", "page.html"])
        .assert()
        .success();

    let template = fs::read_to_string(dir.path().join("page.html")).unwrap();
    assert_eq!(template, "<p>{{ name }}</p>");
    let out = fs::read_to_string(dir.path().join("page.html.html")).unwrap();
    assert_eq!(out, "<p>Ada</p>");
}

#[test]
fn test_output_onto_template_is_usage_error() {
    let dir = fixture();
    stamp(&dir)
        .args(["-m", "card.map", "-o", "./card.j2", "card.j2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overwrite"));

    let template = fs::read_to_string(dir.path().join("card.j2")).unwrap();
    assert!(template.starts_with("{{ name }}"));
}

#[test]
fn test_set_overrides_map() {
    let dir = fixture();
    stamp(&dir)
        .args(["-p", "-m", "card.map", "--set", "name·Grace", "card.j2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Grace:"));
}

#[test]
fn test_custom_separator() {
    let dir = fixture();
    fs::write(dir.path().join("pipe.map"), "name|Ada\ntags|x|y\n").unwrap();
    stamp(&dir)
        .args(["-p", "-m", "pipe.map", "-s", "|", "card.j2"])
        .assert()
        .success()
        .stdout("Ada:x;y;");
}

#[test]
fn test_stdout_and_httpd_conflict_has_no_side_effects() {
    let dir = fixture();
    stamp(&dir)
        .args(["--stdout", "--httpd", "-m", "card.map", "card.j2"])
        .assert()
        .code(1)
        .stdout("");

    assert!(!dir.path().join("card.html").exists());
}

#[test]
fn test_missing_template_argument() {
    let dir = fixture();
    stamp(&dir).assert().code(1);
}

#[test]
fn test_empty_separator_is_usage_error() {
    let dir = fixture();
    stamp(&dir)
        .args(["-p", "-s", "", "card.j2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("separator"));
}

#[test]
fn test_missing_template_file_exit_2() {
    let dir = fixture();
    stamp(&dir)
        .args(["-p", "nope.j2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope.j2"));
}

#[test]
fn test_render_failure_exit_2() {
    let dir = fixture();
    fs::write(dir.path().join("bad.j2"), "{{ who.name }}").unwrap();
    stamp(&dir).args(["-p", "bad.j2"]).assert().code(2);
}

#[test]
fn test_undecodable_map_line_still_renders() {
    let dir = fixture();
    fs::write(dir.path().join("latin1.map"), b"name\xc2\xb7Ada\ncaf\xe9\xc2\xb7x\n").unwrap();
    stamp(&dir)
        .args(["-p", "-m", "latin1.map", "card.j2"])
        .assert()
        .success()
        .stdout("Ada:");
}

#[test]
fn test_missing_map_file_exit_3() {
    let dir = fixture();
    stamp(&dir)
        .args(["-p", "-m", "missing.map", "card.j2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.map"));
}

#[test]
fn test_help_and_version_exit_0() {
    let dir = fixture();
    stamp(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--httpd"));
    stamp(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
