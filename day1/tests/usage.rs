use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn fail_without_arguments() {
    let mut cmd = Command::cargo_bin("day1").unwrap();

    cmd.assert().failure().code(1).stdout(str::is_empty());
}

#[test]
fn fail_on_non_integer_part_number() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("one").arg("inputs.txt");

    cmd.assert().failure().code(1).stdout(str::is_empty());
}

#[test]
fn fail_on_part_number_out_of_range() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("3").arg("inputs.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(str::is_empty())
        .stderr(str::contains("Part number"));
}

#[test]
fn fail_on_missing_input_file() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("1").arg("no_such_inputs.txt");

    cmd.assert().failure().code(1).stdout(str::is_empty());
}
