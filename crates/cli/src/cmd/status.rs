//! Status command implementation.
//!
//! Displays the selected stack, project context, selected provisions and the
//! size of the pending plan.

use anyhow::Result;

use provisioner_lib::config::Settings;
use provisioner_lib::store::ProjectContext;

use super::Workspace;
use crate::output::{OutputFormat, print_info, print_json, print_stat, symbols, version_suffix};

pub fn cmd_status(settings: &Settings, output: OutputFormat) -> Result<()> {
  let ws = Workspace::open(settings)?;
  let store = &ws.store;
  let summary = store.plan_summary();

  if output.is_json() {
    let json_output = serde_json::json!({
      "session": ws.session.path().display().to_string(),
      "state": store,
      "summary": summary,
    });
    return print_json(&json_output);
  }

  let Some(stack) = store.selected_stack.as_deref() else {
    print_info("No stack selected. Run 'prov select <STACK>' or 'prov load <PROJECT>'.");
    return Ok(());
  };

  let stack_label = ws
    .catalog
    .stack(stack)
    .map(|s| format!("{} ({})", s.label, stack))
    .unwrap_or_else(|| format!("{} (not in catalog)", stack));

  print_stat("Stack", &stack_label);
  match &store.project_context {
    ProjectContext::New => print_stat("Project", "new"),
    ProjectContext::Existing { project_id } => {
      let name = ws.catalog.project(project_id).map(|p| p.name.as_str()).unwrap_or("unknown");
      print_stat("Project", &format!("{} ({})", project_id, name));
    }
  }
  print_stat("Session", &ws.session.path().display().to_string());

  println!();
  if store.selected_provisions.is_empty() {
    println!("No provisions selected");
  } else {
    println!("Provisions:");
    for selected in &store.selected_provisions {
      let required = ws.catalog.is_required(stack, &selected.provision_id);
      let marker = if required { symbols::REQUIRED } else { symbols::INFO };
      println!(
        "  {} {}{}",
        marker,
        selected.label,
        version_suffix(selected.version.as_deref())
      );
    }
  }

  println!();
  if summary.is_empty() {
    print_stat("Pending changes", "none");
  } else {
    print_stat(
      "Pending changes",
      &format!(
        "{} (+{} -{} ~{})",
        summary.total(),
        summary.adds,
        summary.removes,
        summary.updates
      ),
    );
  }

  Ok(())
}
