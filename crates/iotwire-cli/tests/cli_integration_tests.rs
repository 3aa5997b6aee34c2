//! Integration tests for the iotwire binary.
//!
//! Runs the compiled binary against temporary input, output and config files.

#![allow(non_snake_case)]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn iotwire() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iotwire"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = iotwire()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

// =============================================================================
// models / describe
// =============================================================================

#[test]
fn models___lists_catalog() {
    let output = iotwire().arg("models").output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.lines().any(|l| l.starts_with("CreateThingRequest ")));
    assert!(text.lines().any(|l| l.starts_with("DynamoDBAction ")));
}

#[test]
fn describe___known_model___prints_fields() {
    let output = iotwire().args(["describe", "Action"]).output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("dynamo_db"));
    assert!(text.contains("dynamoDB"));
}

#[test]
fn describe___unknown_model___fails() {
    let output = iotwire().args(["describe", "Widget"]).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Widget"));
}

// =============================================================================
// schema
// =============================================================================

#[test]
fn schema___single_model___writes_file_with_dependencies() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.json");

    let output = iotwire()
        .args(["schema", "--model", "ListCertificatesResult", "-o"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    let definitions = document["definitions"].as_object().unwrap();
    assert_eq!(definitions.len(), 2);
    assert_eq!(
        definitions["ListCertificatesResult"]["properties"]["certificates"]["items"]["$ref"],
        "#/definitions/Certificate"
    );
}

// =============================================================================
// normalize
// =============================================================================

#[test]
fn normalize___stdin___writes_sparse_document() {
    let output = run_with_stdin(
        &["normalize", "ListThingPrincipalsResult"],
        r#"{"principals": ["arn:a", null, "arn:b"], "nextToken": "ignored"}"#,
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "{\"principals\":[\"arn:a\",\"arn:b\"]}\n");
}

#[test]
fn normalize___pretty_flag___indents_output() {
    let output = run_with_stdin(
        &["normalize", "DescribeEndpointResult", "--pretty"],
        r#"{"endpointAddress": "abc.iot.us-east-1.amazonaws.com"}"#,
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{\n  \"endpointAddress\": \"abc.iot.us-east-1.amazonaws.com\"\n}\n"
    );
}

#[test]
fn normalize___files_and_config___applies_configuration() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("iotwire.toml");
    let input = dir.path().join("in.json");
    let output_path = dir.path().join("out.json");
    fs::write(&config, "pretty = true\nlog_level = \"error\"\n").unwrap();
    fs::write(&input, r#"{"policyName": "p", "policyArn": null}"#).unwrap();

    let output = iotwire()
        .arg("--config")
        .arg(&config)
        .args(["normalize", "Policy", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "{\n  \"policyName\": \"p\"\n}\n"
    );
}

#[test]
fn normalize___non_object___succeeds_without_output() {
    let output = run_with_stdin(&["normalize", "Policy"], "[1, 2, 3]");

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn normalize___malformed_json___fails() {
    let output = run_with_stdin(&["normalize", "Policy"], "{\"policyName\": ");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to normalize"));
}

#[test]
fn global_options___invalid_log_level___fails() {
    let output = iotwire()
        .args(["--log-level", "loud", "models"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid log level"));
}
