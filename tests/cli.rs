//! CLI integration tests for glyphscript
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn glyphscript() -> Command {
    Command::cargo_bin("glyphscript").unwrap()
}

#[test]
fn test_help() {
    glyphscript()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("glyph payloads"));
}

#[test]
fn test_version() {
    glyphscript()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glyphscript"));
}

#[test]
fn test_sets_listing() {
    glyphscript()
        .arg("sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("animals"));
}

#[test]
fn test_map_table() {
    glyphscript()
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("A"))
        .stdout(predicate::str::contains("😀"))
        .stdout(predicate::str::contains("="));
}

#[test]
fn test_encode_abc() {
    glyphscript()
        .args(["encode", "-q"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("😘😖😉😣\n");
}

#[test]
fn test_roundtrip_via_stdin() {
    let output = glyphscript()
        .args(["encode", "-q"])
        .write_stdin("Write-Host 'hello'")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let payload = String::from_utf8(output).unwrap();

    glyphscript()
        .args(["decode", "-q"])
        .write_stdin(payload)
        .assert()
        .success()
        .stdout("Write-Host 'hello'\n");
}

#[test]
fn test_roundtrip_with_alternate_set() {
    let output = glyphscript()
        .args(["encode", "-q", "--set", "animals"])
        .write_stdin("abc")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let payload = String::from_utf8(output).unwrap();

    glyphscript()
        .args(["decode", "-q", "--set", "animals"])
        .write_stdin(payload)
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn test_loader_output() {
    glyphscript()
        .args(["loader", "-q"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# GlyphScript Fast Loader"))
        .stdout(predicate::str::contains("😘😖😉😣"))
        .stdout(predicate::str::contains("Invoke-Expression $s"));
}

#[test]
fn test_size_summary_on_stderr() {
    glyphscript()
        .arg("encode")
        .write_stdin("abc")
        .assert()
        .success()
        .stderr(predicate::str::contains("encoded 3.0 B"));
}

#[test]
fn test_quiet_suppresses_summary() {
    glyphscript()
        .args(["encode", "-q"])
        .write_stdin("abc")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_set_fails_with_suggestion() {
    glyphscript()
        .args(["encode", "--set", "defalt"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("glyph set 'defalt' not found"))
        .stderr(predicate::str::contains("did you mean 'default'?"));
}

#[test]
fn test_decode_rejects_foreign_payload() {
    glyphscript()
        .args(["decode", "-q"])
        .write_stdin("not a payload")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown glyph"));
}

#[test]
fn test_file_output() {
    let dir = std::env::temp_dir().join("glyphscript-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("loader.ps1");

    glyphscript()
        .args(["loader", "-q", "-o"])
        .arg(&out)
        .write_stdin("abc")
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("# GlyphScript Fast Loader"));
    assert!(written.ends_with("if ($s) { Invoke-Expression $s }"));
    std::fs::remove_file(&out).unwrap();
}
