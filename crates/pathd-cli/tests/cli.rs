use assert_cmd::Command;
use serde_json::{json, Value};

fn pathd() -> Command {
    Command::new(assert_cmd::cargo_bin!("pathd-cli"))
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is not valid JSON")
}

#[test]
fn format_prints_one_command_per_line() {
    let assert = pathd().args(["format", "M0,0 L1,1z"]).assert().success();
    assert.stdout("M0,0\nL1,1\nz\n");
}

#[test]
fn format_compact_merges_repetition() {
    let assert = pathd()
        .args(["format", "--compact", "M0,0 L1,2 L3,4"])
        .assert()
        .success();
    assert.stdout("M0,0,1,2,3,4\n");
}

#[test]
fn absolute_resolves_relative_commands() {
    let assert = pathd()
        .args(["absolute", "--compact", "m1,2 l2,2"])
        .assert()
        .success();
    assert.stdout("M1,2,3,4\n");
}

#[test]
fn relative_inverts_absolute_commands() {
    let assert = pathd()
        .args(["relative", "--compact", "M1,2 L3,4"])
        .assert()
        .success();
    assert.stdout("m1,2,2,2\n");
}

#[test]
fn parse_emits_command_arrays() {
    let output = pathd()
        .args(["parse", "M0,0 a1,2,0,0,1,3,4 z"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        stdout_json(&output),
        json!([["M", 0.0, 0.0], ["a", 1.0, 2.0, 0.0, 0, 1, 3.0, 4.0], ["z"]])
    );
}

#[test]
fn tokens_dumps_the_raw_stream() {
    let output = pathd()
        .args(["tokens", "M0,0,1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let tokens = stdout_json(&output);
    let tokens = tokens.as_array().expect("token array");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0]["token"], "command");
    assert_eq!(tokens[1]["token"], "error");
    assert_eq!(tokens[1]["kind"], "unexpected-number");
    assert_eq!(tokens[1]["index"], 5);
}

#[test]
fn syntax_errors_exit_nonzero_with_offset() {
    pathd()
        .args(["format", "M0,0,1"])
        .assert()
        .failure()
        .code(1)
        .stderr("Syntax Error: Unexpected number at index 5\n");
}

#[test]
fn reads_stdin_when_no_path_is_given() {
    let assert = pathd()
        .arg("format")
        .write_stdin("M0,0 L1,1\n")
        .assert()
        .success();
    assert.stdout("M0,0\nL1,1\n");
}

#[test]
fn unknown_flags_exit_with_usage() {
    pathd().args(["format", "--bogus"]).assert().code(2);
}
