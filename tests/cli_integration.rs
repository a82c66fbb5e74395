// CLI integration tests for the process-per-test-case flow.
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_marshalite");
    Command::new(exe)
}

fn parse_json(value: &str) -> Value {
    serde_json::from_str(value).expect("valid json")
}

fn parse_json_line(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    let line = text.lines().next().expect("json line");
    parse_json(line)
}

#[test]
fn coin_change_end_to_end() {
    let run = cmd()
        .args(["run", "coin-change", r#"{"coins":[1,2,5],"amount":11}"#])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    assert_eq!(envelope.get("result").unwrap().as_i64().unwrap(), 3);
    assert!(envelope.get("execution_time").unwrap().as_u64().is_some());
}

#[test]
fn wrapped_input_matches_bare_input() {
    let bare = cmd()
        .args(["run", "coin-change", r#"{"coins":[1,2,5],"amount":11}"#])
        .output()
        .expect("bare");
    let wrapped = cmd()
        .args([
            "run",
            "coin-change",
            r#"{"input": "{\"coins\":[1,2,5],\"amount\":11}"}"#,
        ])
        .output()
        .expect("wrapped");
    assert!(bare.status.success());
    assert!(wrapped.status.success());
    assert_eq!(
        parse_json_line(&bare.stdout).get("result"),
        parse_json_line(&wrapped.stdout).get("result")
    );
}

#[test]
fn sliding_window_maximum_returns_sequence() {
    let run = cmd()
        .args([
            "run",
            "sliding-window-maximum",
            r#"{"nums":[1,3,-1,-3,5,3,6,7],"k":3}"#,
        ])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    assert_eq!(
        envelope.get("result").unwrap(),
        &parse_json("[3,3,5,5,6,7]")
    );
}

#[test]
fn invert_binary_tree_round_trips_nulls() {
    let run = cmd()
        .args(["run", "invert-binary-tree", r#"{"root":[1,2,3,null,null,4,5]}"#])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    assert_eq!(
        envelope.get("result").unwrap(),
        &parse_json("[1,3,2,5,4]")
    );
}

#[test]
fn rotate_image_reports_the_mutated_matrix() {
    let run = cmd()
        .args(["run", "rotate-image", r#"{"matrix":[[1,2],[3,4]]}"#])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    assert_eq!(envelope.get("result").unwrap(), &parse_json("[[3,1],[4,2]]"));
}

#[test]
fn merge_two_sorted_lists_flattens_the_chain() {
    let run = cmd()
        .args([
            "run",
            "merge-two-sorted-lists",
            r#"{"list1":[1,2,4],"list2":[1,3,4]}"#,
        ])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    assert_eq!(
        envelope.get("result").unwrap(),
        &parse_json("[1,1,2,3,4,4]")
    );
}

#[test]
fn missing_field_yields_error_envelope_with_exit_zero() {
    let run = cmd()
        .args(["run", "coin-change", r#"{"coins":[1,2,5]}"#])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    let message = envelope.get("result").unwrap().as_str().expect("error text");
    assert!(message.contains("amount"));
    assert_eq!(envelope.get("execution_time").unwrap().as_u64(), Some(0));
}

#[test]
fn routine_failure_yields_error_envelope_with_exit_zero() {
    // Ragged rows push the spiral walk out of bounds inside the routine.
    let run = cmd()
        .args(["run", "spiral-matrix", r#"{"matrix":[[1,2,3],[4]]}"#])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    assert!(envelope.get("result").unwrap().is_string());
    assert!(envelope.get("execution_time").unwrap().as_u64().is_some());
}

#[test]
fn stdin_input_is_supported() {
    let mut child = cmd()
        .args(["run", "two-sum", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(br#"{"nums":[2,7,11,15],"target":9}"#)
        .expect("write");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    let envelope = parse_json_line(&output.stdout);
    assert_eq!(envelope.get("result").unwrap(), &parse_json("[0,1]"));
}

#[test]
fn file_input_is_supported() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("case.json");
    std::fs::write(&path, r#"{"word1":"horse","word2":"ros"}"#).expect("write case");

    let run = cmd()
        .args(["run", "edit-distance", "--input-file", path.to_str().unwrap()])
        .output()
        .expect("run");
    assert!(run.status.success());
    let envelope = parse_json_line(&run.stdout);
    assert_eq!(envelope.get("result").unwrap().as_i64(), Some(3));
}

#[test]
fn unknown_method_is_a_usage_error() {
    let run = cmd()
        .args(["run", "no-such-problem", "{}"])
        .output()
        .expect("run");
    assert!(!run.status.success());
    assert_eq!(run.status.code(), Some(2));
    let err = parse_json_line(&run.stderr);
    assert_eq!(
        err.get("error").unwrap().get("kind").unwrap().as_str(),
        Some("Usage")
    );
}

#[test]
fn missing_input_is_a_usage_error() {
    let run = cmd().args(["run", "coin-change"]).output().expect("run");
    assert!(!run.status.success());
    assert_eq!(run.status.code(), Some(2));
}

#[test]
fn problems_listing_is_json() {
    let run = cmd().arg("problems").output().expect("problems");
    assert!(run.status.success());
    let listing: Value =
        serde_json::from_slice(&run.stdout).expect("listing json");
    let names: Vec<&str> = listing
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry.get("name").unwrap().as_str().unwrap())
        .collect();
    assert!(names.contains(&"coin-change"));
    assert!(names.contains(&"rotate-image"));
}
