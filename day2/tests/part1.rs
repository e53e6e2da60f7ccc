use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "A Y\nB X\nC Z\n").unwrap();

    let mut cmd = Command::cargo_bin("day2").unwrap();
    cmd.arg("1").arg(input.path());

    cmd.assert().success().stdout(str::diff("15\n"));
}

#[test]
fn part1_fail_on_malformed_line() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "A Y\nA\nC Z\n").unwrap();

    let mut cmd = Command::cargo_bin("day2").unwrap();
    cmd.arg("1").arg(input.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(str::is_empty())
        .stderr(str::contains("single-character columns"));
}

#[test]
fn part1_fail_on_invalid_shape() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "D X\n").unwrap();

    let mut cmd = Command::cargo_bin("day2").unwrap();
    cmd.arg("1").arg(input.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(str::is_empty())
        .stderr(str::contains("Invalid character(D) for shape"));
}
