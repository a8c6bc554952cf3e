//! End-to-end tests for the `jawm` binary.

#![allow(deprecated)] // cargo_bin is deprecated for custom build dirs only

use std::collections::HashSet;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn jawm() -> Command {
    Command::cargo_bin("jawm").expect("jawm binary")
}

fn wordlist(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp wordlist");
    for word in words {
        writeln!(file, "{word}").expect("write word");
    }
    file
}

fn output_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout).lines().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Help and argument errors
// ---------------------------------------------------------------------------

#[test]
fn help_prints_usage() {
    jawm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Just Another Word Mangler"))
        .stdout(predicate::str::contains("--wordlist"))
        .stdout(predicate::str::contains("Example Usage"));
}

#[test]
fn missing_wordlist_shows_usage() {
    jawm()
        .assert()
        .failure()
        .stdout(predicate::str::contains("Just Another Word Mangler"))
        .stderr(predicate::str::contains("--wordlist"));
}

#[test]
fn invalid_number_shows_usage() {
    let words = wordlist(&["cat"]);
    jawm()
        .arg("-w")
        .arg(words.path())
        .args(["-n", "lots"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Just Another Word Mangler"))
        .stderr(predicate::str::contains("invalid value 'lots' for --numbers"));
}

#[test]
fn zero_minimum_length_shows_usage() {
    let words = wordlist(&["cat"]);
    jawm()
        .arg("-w")
        .arg(words.path())
        .args(["-l", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Just Another Word Mangler"))
        .stderr(predicate::str::contains("invalid value '0' for --minlength"));
}

#[test]
fn unreadable_wordlist_is_fatal_without_usage() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");
    jawm()
        .arg("-w")
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Just Another Word Mangler").not())
        .stderr(predicate::str::contains("failed to open file"));
}

// ---------------------------------------------------------------------------
// Mangling
// ---------------------------------------------------------------------------

#[test]
fn plain_run_prints_case_variants() {
    let words = wordlist(&["Pass"]);
    let assert = jawm().arg("-w").arg(words.path()).arg("--sort").assert().success();
    assert_eq!(output_lines(&assert.get_output().stdout), vec!["Pass", "pass"]);
}

#[test]
fn latin1_wordlist_is_mangled() {
    let file = NamedTempFile::new().expect("temp wordlist");
    std::fs::write(file.path(), b"alpha\ncaf\xe9\nbeta\n").unwrap();
    let assert = jawm().arg("-w").arg(file.path()).arg("--sort").assert().success();
    let lines = output_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "alpha");
    assert_eq!(lines[1], "beta");
}

#[test]
fn numbers_and_specials() {
    let words = wordlist(&["cat"]);
    let assert = jawm()
        .arg("-w")
        .arg(words.path())
        .args(["-U", "-n", "1", "-s"])
        .assert()
        .success();
    let lines = output_lines(&assert.get_output().stdout);
    let unique: HashSet<&String> = lines.iter().collect();
    assert_eq!(lines.len(), 110);
    assert_eq!(unique.len(), 110);
    assert!(lines.iter().any(|l| l == "Cat7"));
    assert!(lines.iter().any(|l| l == "Cat7$"));
    assert!(!lines.iter().any(|l| l == "Cat"));
}

#[test]
fn minimum_length_filters() {
    let words = wordlist(&["a", "ab", "abc"]);
    let assert = jawm()
        .arg("-w")
        .arg(words.path())
        .args(["-l", "3", "--sort"])
        .assert()
        .success();
    assert_eq!(output_lines(&assert.get_output().stdout), vec!["abc"]);
}

#[test]
fn verbose_messages_in_stage_order() {
    let words = wordlist(&["ab"]);
    let assert = jawm()
        .arg("-w")
        .arg(words.path())
        .args(["-v", "-n", "1", "-s", "1", "-l", "4"])
        .assert()
        .success();
    let logs: Vec<String> = output_lines(&assert.get_output().stdout)
        .into_iter()
        .filter(|l| l.starts_with("[JAWM]"))
        .collect();
    assert_eq!(logs.len(), 6);
    assert!(logs[0].starts_with("[JAWM] Loaded 1 candidates"));
    assert_eq!(logs[1], "[JAWM] Adding 1 numbers to each word.");
    assert_eq!(logs[2], "[JAWM] Adding 1 special characters to each word.");
    assert_eq!(logs[3], "[JAWM] Removing short passwords.");
    assert_eq!(logs[4], "[JAWM] Removed 10 short passwords.");
    assert_eq!(logs[5], "[JAWM] Generated 100 unique passwords.");
}

// ---------------------------------------------------------------------------
// Output file
// ---------------------------------------------------------------------------

#[test]
fn output_file_is_written() {
    let words = wordlist(&["dog"]);
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");
    jawm()
        .arg("-w")
        .arg(words.path())
        .arg("-o")
        .arg(&out)
        .args(["-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let saved = std::fs::read_to_string(&out).unwrap();
    assert_eq!(saved.lines().count(), 100);
    assert!(saved.lines().any(|l| l == "dog00"));
}

#[test]
fn existing_output_file_is_left_alone() {
    let words = wordlist(&["dog"]);
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");
    std::fs::write(&out, "precious\n").unwrap();
    jawm()
        .arg("-w")
        .arg(words.path())
        .arg("-o")
        .arg(&out)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("file already exists"))
        .stdout(predicate::str::contains("dog\n").not());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "precious\n");
}
