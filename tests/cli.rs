//! Whole-binary integration tests, one per tool, in the same spirit as the
//! teacher's own workspace-root `[[test]] name = "integration"` — these
//! exercise each CLI end to end (argument parsing, stdin/file handling,
//! process exit codes) rather than a crate's internal API.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f
}

#[test]
fn ugrep_finds_literal_match_and_exits_zero() {
    let file = write_temp("hello world\nother line\n");
    Command::cargo_bin("ugrep")
        .unwrap()
        .args(["world"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn ugrep_exits_one_on_no_match() {
    let file = write_temp("nothing interesting here\n");
    Command::cargo_bin("ugrep")
        .unwrap()
        .args(["zzz"])
        .arg(file.path())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn ugrep_count_flag_prints_match_count() {
    let file = write_temp("a\nb\na\n");
    Command::cargo_bin("ugrep")
        .unwrap()
        .args(["-c", "a"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn ucat_numbers_lines_with_n_flag() {
    let file = write_temp("first\nsecond\n");
    Command::cargo_bin("ucat")
        .unwrap()
        .arg("-n")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tfirst"));
}

#[test]
fn ucut_selects_requested_field() {
    let file = write_temp("a:b:c\n");
    Command::cargo_bin("ucut")
        .unwrap()
        .args(["-f", "2", "-d", ":"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn ucut_selects_char_range() {
    let file = write_temp("abcdef\n");
    Command::cargo_bin("ucut")
        .unwrap()
        .args(["-c", "2-4"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("bcd\n");
}

#[test]
fn usort_sorts_and_deduplicates() {
    let file = write_temp("banana\napple\napple\ncherry\n");
    Command::cargo_bin("usort")
        .unwrap()
        .arg("-u")
        .arg(file.path())
        .assert()
        .success()
        .stdout("apple\nbanana\ncherry\n");
}

#[test]
fn usort_reverse_flag_inverts_order() {
    let file = write_temp("a\nc\nb\n");
    Command::cargo_bin("usort")
        .unwrap()
        .arg("-r")
        .arg(file.path())
        .assert()
        .success()
        .stdout("c\nb\na\n");
}

#[test]
fn utr_translates_set1_to_set2() {
    Command::cargo_bin("utr")
        .unwrap()
        .args(["abc", "xyz"])
        .write_stdin("cab\n")
        .assert()
        .success()
        .stdout("zxy\n");
}

#[test]
fn utr_deletes_set1_characters() {
    Command::cargo_bin("utr")
        .unwrap()
        .args(["-d", "aeiou"])
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout("hll wrld\n");
}

#[test]
fn uwc_counts_lines_words_and_chars() {
    let file = write_temp("one two\nthree\n");
    Command::cargo_bin("uwc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));
}
