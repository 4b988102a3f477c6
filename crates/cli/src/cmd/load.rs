use anyhow::{Context, Result};

use provisioner_lib::config::Settings;

use super::Workspace;
use crate::output::{print_info, print_success, print_warning};

/// Load an existing project's provisioning into the session.
pub fn cmd_load(settings: &Settings, project: &str) -> Result<()> {
  let mut ws = Workspace::open(settings)?;

  if !ws.store.plan_actions.is_empty() {
    print_warning(&format!(
      "Discarding {} pending change(s) from the current session",
      ws.store.plan_actions.len()
    ));
  }

  let report = ws
    .store
    .load_project_provisions(&ws.catalog, project)
    .with_context(|| format!("Failed to load project '{}'", project))?;

  print_success(&format!(
    "Loaded project '{}' on stack '{}' ({} provision(s))",
    report.project_id,
    report.stack,
    ws.store.selected_provisions.len()
  ));
  if !report.required_added.is_empty() {
    print_info(&format!(
      "Added required provisions: {}",
      report.required_added.join(", ")
    ));
  }
  if !report.skipped.is_empty() {
    print_warning(&format!(
      "Skipped provisions not in the catalog: {}",
      report.skipped.join(", ")
    ));
  }

  ws.save()
}
