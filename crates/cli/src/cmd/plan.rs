//! Implementation of the `prov plan` command.
//!
//! Prints the change plan accumulated in the current session, in the order
//! the changes were made.

use anyhow::Result;
use serde::Serialize;

use provisioner_lib::config::Settings;
use provisioner_lib::plan::{PlanAction, PlanSummary};

use super::Workspace;
use crate::output::{OutputFormat, print_info, print_json, print_plan_line, print_stat};

pub fn cmd_plan(settings: &Settings, raw: bool, output: OutputFormat) -> Result<()> {
  let ws = Workspace::open(settings)?;
  let store = &ws.store;

  if output.is_json() {
    #[derive(Serialize)]
    struct PlanOutput<'a> {
      plan: String,
      actions: &'a [PlanAction],
      summary: PlanSummary,
    }

    return print_json(&PlanOutput {
      plan: store.generate_plan(),
      actions: &store.plan_actions,
      summary: store.plan_summary(),
    });
  }

  if raw {
    let plan = store.generate_plan();
    if !plan.is_empty() {
      println!("{}", plan);
    }
    return Ok(());
  }

  if store.plan_actions.is_empty() {
    print_info("No pending changes");
    return Ok(());
  }

  for action in &store.plan_actions {
    print_plan_line(action);
  }

  let summary = store.plan_summary();
  println!();
  print_stat("Add", &summary.adds.to_string());
  print_stat("Remove", &summary.removes.to_string());
  print_stat("Update", &summary.updates.to_string());

  Ok(())
}
