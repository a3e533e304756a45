use assert_cmd::Command;
use predicates::str::{contains, diff};

fn cmd() -> Command {
    Command::cargo_bin("currency-words").unwrap()
}

#[test]
fn convert_argument() {
    cmd()
        .args(["convert", "25,1"])
        .assert()
        .success()
        .stdout(diff("twenty-five dollars and ten cents\n"));
}

#[test]
fn convert_reads_line_from_stdin() {
    cmd()
        .arg("convert")
        .write_stdin("999 999 999,99\n")
        .assert()
        .success()
        .stdout(contains(
            "nine hundred ninety-nine million nine hundred ninety-nine thousand nine hundred ninety-nine dollars and ninety-nine cents",
        ));
}

#[test]
fn convert_format_error_is_normal_outcome() {
    cmd()
        .args(["convert", "0.5"])
        .assert()
        .success()
        .stdout(contains(
            "Input could not be recognized as a number. Please use ',' (comma) as decimal separator and spaces as optional thousands separator",
        ));
}

#[test]
fn convert_empty_stdin_is_format_error() {
    cmd()
        .arg("convert")
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Input could not be recognized as a number."));
}

#[test]
fn convert_range_error_shows_own_message() {
    cmd()
        .args(["convert", "100 000 000 000"])
        .assert()
        .success()
        .stdout(contains("Value should be below $999 999 999,99"));
}

#[test]
fn convert_overflow_error() {
    cmd()
        .args(["convert", "99999999999999999999999999999999"])
        .assert()
        .success()
        .stdout(contains(
            "Value is too large or too small to be internally representable",
        ));
}

#[test]
fn convert_json() {
    cmd()
        .args(["convert", "--json", "45 100"])
        .assert()
        .success()
        .stdout(contains(r#""cents":4510000"#))
        .stdout(contains(r#""words":"forty-five thousand one hundred dollars""#));
}

#[test]
fn convert_json_error() {
    cmd()
        .args(["convert", "--json", "1,234"])
        .assert()
        .success()
        .stdout(contains(r#""code":"GRANULARITY_ERROR""#));
}

#[test]
fn convert_negative_is_format_error() {
    cmd()
        .args(["convert", "-1"])
        .assert()
        .success()
        .stdout(contains("Input could not be recognized as a number."));
}
