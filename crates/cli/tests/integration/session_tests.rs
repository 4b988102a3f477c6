use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn toggle_twice_scenario_persists_plan() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env.run_ok(&["toggle", "jest", "--version", "29.7.0"]);
  env.run_ok(&["toggle", "jest", "--version", "29.7.0"]);

  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("ADD Jest (29.7.0)\nREMOVE Jest\n");

  let session = env.session_json();
  assert_eq!(session["state"]["selectedStack"], "node");
  assert_eq!(session["state"]["selectedProvisions"], serde_json::json!([]));
  assert_eq!(session["state"]["planActions"].as_array().unwrap().len(), 2);
}

#[test]
fn toggle_uses_catalog_label_and_default_version() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env
    .prov_cmd()
    .args(["toggle", "postgres"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Added PostgreSQL (16)"));

  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("ADD PostgreSQL (16)\n");
}

#[test]
fn set_version_records_update() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env.run_ok(&["toggle", "jest"]);
  env.run_ok(&["set-version", "jest", "28.1.3"]);

  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("ADD Jest (29.7.0)\nUPDATE Jest from 29.7.0 to 28.1.3\n");
}

#[test]
fn set_version_same_version_adds_nothing() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env.run_ok(&["toggle", "jest", "--version", "29.7.0"]);
  env
    .prov_cmd()
    .args(["set-version", "jest", "29.7.0"])
    .assert()
    .success()
    .stdout(predicate::str::contains("already at 29.7.0"));

  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("ADD Jest (29.7.0)\n");
}

#[test]
fn unoffered_version_warns_on_toggle_and_set_version() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env
    .prov_cmd()
    .args(["toggle", "jest", "--version", "30.0.0"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Version 30.0.0 is not offered for Jest"));

  env
    .prov_cmd()
    .args(["set-version", "jest", "27.0.0"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Version 27.0.0 is not offered for Jest"));

  env
    .prov_cmd()
    .args(["set-version", "jest", "28.1.3"])
    .assert()
    .success()
    .stderr(predicate::str::contains("not offered").not());

  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("ADD Jest (30.0.0)\nUPDATE Jest from 30.0.0 to 27.0.0\nUPDATE Jest from 27.0.0 to 28.1.3\n");
}

#[test]
fn set_version_unselected_fails() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env
    .prov_cmd()
    .args(["set-version", "jest", "28.1.3"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("not selected"));
}

#[test]
fn required_provision_cannot_be_toggled() {
  let env = TestEnv::new();

  env
    .prov_cmd()
    .args(["select", "python"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Required provisions: ruff, pytest"));

  env
    .prov_cmd()
    .args(["toggle", "ruff"])
    .assert()
    .success()
    .stdout(predicate::str::contains("required"));

  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("ADD Ruff (0.4.4)\nADD pytest (8.2.0)\n");
}

#[test]
fn select_react_has_empty_plan() {
  let env = TestEnv::new();

  env.run_ok(&["select", "react"]);

  env.prov_cmd().args(["plan", "--raw"]).assert().success().stdout("");
  env
    .prov_cmd()
    .arg("plan")
    .assert()
    .success()
    .stdout(predicate::str::contains("No pending changes"));
}

#[test]
fn select_unknown_stack_warns() {
  let env = TestEnv::new();

  env
    .prov_cmd()
    .args(["select", "cobol"])
    .assert()
    .success()
    .stderr(predicate::str::contains("not in the catalog"));

  let session = env.session_json();
  assert_eq!(session["state"]["selectedStack"], "cobol");
}

#[test]
fn clear_requires_force_when_not_interactive() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env.run_ok(&["toggle", "jest"]);

  env
    .prov_cmd()
    .arg("clear")
    .assert()
    .failure()
    .stderr(predicate::str::contains("--force"));

  env.run_ok(&["clear", "--force"]);

  let session = env.session_json();
  assert_eq!(
    session["state"],
    serde_json::json!({
      "selectedStack": null,
      "selectedProvisions": [],
      "planActions": [],
      "projectContext": { "isNewProject": true }
    })
  );
}

#[test]
fn plan_json_output() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env.run_ok(&["toggle", "docker"]);

  let output = env.prov_cmd().args(["plan", "-o", "json"]).output().unwrap();
  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["plan"], "ADD Docker");
  assert_eq!(json["actions"][0]["type"], "ADD");
  assert_eq!(json["summary"]["adds"], 1);
}

#[test]
fn custom_catalog_from_config_file() {
  let env = TestEnv::new();
  env.write_file(
    "config/provisioner/catalogs/go.json",
    r#"{
      "stacks": [{ "id": "go", "label": "Go" }],
      "provisions": [
        { "stack": "go", "id": "golangci", "label": "golangci-lint", "category": "code-quality", "required": true }
      ]
    }"#,
  );
  env.write_file("config/provisioner/config.toml", "catalog = \"catalogs/go.json\"\n");

  env
    .prov_cmd()
    .arg("stacks")
    .assert()
    .success()
    .stdout(predicate::str::contains("Go"))
    .stdout(predicate::str::contains("React").not());

  env.run_ok(&["select", "go"]);
  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("ADD golangci-lint\n");
}
