use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn identcase() -> Command {
    let mut cmd = Command::cargo_bin("identcase").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_arguments_in_every_style() {
    let dir = tempdir().unwrap();
    identcase()
        .current_dir(dir.path())
        .args(["--no-color", "XMLHttpRequest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("camel → xmlHttpRequest"))
        .stdout(predicate::str::contains("kebab → xml-http-request"))
        .stdout(predicate::str::contains("dot   → xml.http.request"));
}

#[test]
fn prints_examples_without_inputs() {
    let dir = tempdir().unwrap();
    identcase()
        .current_dir(dir.path())
        .args(["--no-color", "--style", "kebab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("multiple-separators-and-cases"))
        .stdout(predicate::str::contains("convert-this-string-example"));
}

#[test]
fn json_output_lists_conversions() {
    let dir = tempdir().unwrap();
    let output = identcase()
        .current_dir(dir.path())
        .args(["-o", "json", "--style", "dot", "HelloWorld"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["conversions"][0]["input"], "HelloWorld");
    assert_eq!(parsed["conversions"][0]["style"], "dot");
    assert_eq!(parsed["conversions"][0]["output"], "hello.world");
}

#[test]
fn json_inputs_are_typed() {
    let dir = tempdir().unwrap();
    let output = identcase()
        .current_dir(dir.path())
        .args(["-o", "json", "--json", "--style", "dot", "--style", "camel", "42", "null"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outputs: Vec<&str> = parsed["conversions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["output"].as_str().unwrap())
        .collect();
    assert_eq!(outputs, vec!["42", "", "", ""]);
}

#[test]
fn invalid_json_input_fails() {
    let dir = tempdir().unwrap();
    identcase()
        .current_dir(dir.path())
        .args(["--json", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON input"));
}

#[test]
fn local_config_selects_variant_and_style() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".identcase.toml"),
        "camel_variant = \"separators\"\ndefault_style = \"camel\"\ncolor = false\n",
    )
    .unwrap();

    identcase()
        .current_dir(dir.path())
        .arg("fooBar baz")
        .assert()
        .success()
        .stdout(predicate::str::contains("camel → foobarBaz"))
        .stdout(predicate::str::contains("kebab").not());
}

#[test]
fn cli_variant_overrides_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "camel_variant = \"separators\"\n").unwrap();

    identcase()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["--camel-variant", "decompose", "--style", "camel", "--no-color", "fooBar baz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("camel → fooBarBaz"));
}

#[test]
fn unknown_style_is_rejected() {
    identcase()
        .args(["--style", "snake", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case style"));
}
