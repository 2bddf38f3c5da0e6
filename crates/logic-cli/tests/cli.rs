use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

const FORM: &str = r#"{
  "id": "color-form",
  "fields": [
    { "id": "color", "type": "dropdown" },
    { "id": "other", "type": "text" }
  ],
  "rules": [
    {
      "id": "reveal-other",
      "logicType": "and",
      "conditions": [{ "fieldId": "color", "operator": "equals", "value": "red" }],
      "actions": [{ "type": "show", "fieldId": "other" }]
    }
  ]
}"#;

fn formlogic() -> Command {
    Command::cargo_bin("formlogic").expect("binary")
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

#[test]
fn resolve_without_values_hides_show_targets() {
    let dir = TempDir::new().expect("tempdir");
    let form = dir.child("form.json");
    form.write_str(FORM).expect("write form");

    let assert = formlogic()
        .args(["resolve", "--form"])
        .arg(form.path())
        .assert()
        .success();
    assert_eq!(stdout_of(assert).trim(), "other");
}

#[test]
fn resolve_json_reports_empty_hidden_set_when_rule_fires() {
    let dir = TempDir::new().expect("tempdir");
    let form = dir.child("form.json");
    form.write_str(FORM).expect("write form");
    let values = dir.child("values.json");
    values.write_str(r#"{ "color": "red" }"#).expect("write values");

    let assert = formlogic()
        .args(["resolve", "--format", "json", "--form"])
        .arg(form.path())
        .arg("--values")
        .arg(values.path())
        .assert()
        .success();

    let payload: serde_json::Value =
        serde_json::from_str(&stdout_of(assert)).expect("json stdout");
    assert_eq!(payload["hidden"], serde_json::json!([]));
}

#[test]
fn visibility_reports_each_field() {
    let dir = TempDir::new().expect("tempdir");
    let form = dir.child("form.json");
    form.write_str(FORM).expect("write form");

    let assert = formlogic()
        .args(["visibility", "--form"])
        .arg(form.path())
        .assert()
        .success();

    let output = stdout_of(assert);
    assert!(output.contains(" - color: visible"));
    assert!(output.contains(" - other: hidden"));
}

#[test]
fn schema_lists_document_properties() {
    let assert = formlogic().arg("schema").assert().success();

    let schema: serde_json::Value = serde_json::from_str(&stdout_of(assert)).expect("json schema");
    let properties = schema["properties"].as_object().expect("properties");
    assert!(properties.contains_key("fields"));
    assert!(properties.contains_key("rules"));
}

#[test]
fn unreadable_form_is_a_cli_error() {
    let assert = formlogic()
        .args(["resolve", "--form", "does-not-exist.json"])
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr");
    assert!(stderr.contains("failed to read"));
}
