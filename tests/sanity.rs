use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pretty-string").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn formats_duration_in_millis_by_default() {
    cmd()
        .args(["duration", "0.995"])
        .assert()
        .success()
        .stdout("1 milli\n");
}

#[test]
fn formats_negative_duration_with_unit() {
    cmd()
        .args(["duration", "-1.5", "--unit", "s"])
        .assert()
        .success()
        .stdout("-1.5 seconds\n");
}

#[test]
fn formats_hours_and_minutes() {
    cmd()
        .args(["duration", "65", "--unit", "min"])
        .assert()
        .success()
        .stdout("1 hour, 5 minutes\n");
}

#[test]
fn rejects_unrepresentable_duration() {
    cmd()
        .args(["duration", "1e30", "--unit", "h"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not representable"));
}

#[test]
fn demo_prints_reference_table() {
    let output = cmd().arg("demo").output().expect("Failed to run demo");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "0 millis       | 0");
    assert_eq!(lines[3], "1 milli        | 0.995");
    assert_eq!(lines[6], "1.01 millis    | 1.005");
    assert_eq!(lines[9], "-1 hour, 51 minutes | -6660000");
}

#[test]
fn list_formats_sequence() {
    cmd()
        .args(["list", "1", "2", "3"])
        .assert()
        .success()
        .stdout("[ 1, 2, 3 ]\n");
}

#[test]
fn empty_list_has_no_inner_space() {
    cmd().arg("list").assert().success().stdout("[]\n");
}

#[test]
fn list_as_set_deduplicates() {
    cmd()
        .args(["list", "--set", "b", "a", "b"])
        .assert()
        .success()
        .stdout("{ a, b }\n");
}

#[test]
fn list_with_custom_delimiters() {
    cmd()
        .args(["list", "--before", "(", "--separator", " | ", "--after", ")", "x", "y"])
        .assert()
        .success()
        .stdout("( x | y )\n");
}

#[test]
fn map_keeps_argument_order() {
    cmd()
        .args(["map", "3=three", "1=one"])
        .assert()
        .success()
        .stdout("{ 3: three, 1: one }\n");
}

#[test]
fn map_rejects_malformed_pair() {
    cmd()
        .args(["map", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn json_output() {
    let output = cmd()
        .args(["--json", "map", "a=1", "--joiner", "="])
        .output()
        .expect("Failed to run map");
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["input"], "a=1");
    assert_eq!(value["formatted"], "{ a=1 }");
}

#[test]
fn json_demo_emits_one_object_per_line() {
    let output = cmd().args(["demo", "--json"]).output().expect("Failed to run demo");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("line is JSON"))
        .collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[8]["formatted"], "-1.85 seconds");
    assert_eq!(rows[8]["input"], "-1850");
}

#[test]
fn logs_go_to_stderr() {
    cmd()
        .env("RUST_LOG", "pretty_string=debug")
        .args(["duration", "10"])
        .assert()
        .success()
        .stdout("10 millis\n")
        .stderr(predicate::str::contains("Formatting duration"));
}
