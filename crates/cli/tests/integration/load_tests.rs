use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn load_proj_001_scenario() {
  let env = TestEnv::new();

  env.run_ok(&["load", "proj-001"]);

  let session = env.session_json();
  let state = &session["state"];
  assert_eq!(state["selectedStack"], "react");
  assert_eq!(
    state["selectedProvisions"],
    serde_json::json!([
      { "provisionId": "eslint-prettier", "label": "ESLint + Prettier", "version": "9.0.0" },
      { "provisionId": "testing-library", "label": "React Testing Library", "version": "14.2.1" },
      { "provisionId": "tailwind", "label": "Tailwind CSS", "version": "3.4.1" }
    ])
  );
  assert_eq!(state["planActions"], serde_json::json!([]));
  assert_eq!(
    state["projectContext"],
    serde_json::json!({ "projectId": "proj-001", "isNewProject": false })
  );
}

#[test]
fn load_reports_skipped_ids() {
  let env = TestEnv::new();

  env
    .prov_cmd()
    .args(["load", "proj-002"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Skipped provisions not in the catalog: grunt"));
}

#[test]
fn load_unknown_project_fails_and_keeps_session() {
  let env = TestEnv::new();

  env.run_ok(&["select", "node"]);
  env.run_ok(&["toggle", "jest"]);

  env
    .prov_cmd()
    .args(["load", "proj-404"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("project not found: proj-404"));

  let session = env.session_json();
  assert_eq!(session["state"]["selectedStack"], "node");
  assert_eq!(session["state"]["planActions"].as_array().unwrap().len(), 1);
}

#[test]
fn status_after_load_shows_project() {
  let env = TestEnv::new();

  env.run_ok(&["load", "proj-001"]);

  env
    .prov_cmd()
    .arg("status")
    .assert()
    .success()
    .stdout(predicate::str::contains("proj-001 (Customer Portal)"))
    .stdout(predicate::str::contains("Tailwind CSS (3.4.1)"));
}

#[test]
fn edits_after_load_are_planned() {
  let env = TestEnv::new();

  env.run_ok(&["load", "proj-001"]);
  env.run_ok(&["toggle", "tailwind"]);

  env
    .prov_cmd()
    .args(["plan", "--raw"])
    .assert()
    .success()
    .stdout("REMOVE Tailwind CSS\n");
}
