use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(
        input,
        "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n"
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("2").arg(input.path());

    cmd.assert().success().stdout(str::diff("45000\n"));
}

#[test]
fn part2_fail_when_fewer_than_three_groups() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "10\n\n20\n").unwrap();

    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("2").arg(input.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(str::is_empty())
        .stderr(str::contains("group"));
}
