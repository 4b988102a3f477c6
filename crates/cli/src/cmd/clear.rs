use anyhow::Result;

use provisioner_lib::config::Settings;

use super::Workspace;
use crate::output::{print_info, print_success};
use crate::prompts::confirm;

pub fn cmd_clear(settings: &Settings, force: bool) -> Result<()> {
  let mut ws = Workspace::open(settings)?;

  let pending = ws.store.plan_actions.len();
  if ws.store.selected_stack.is_none() && pending == 0 && ws.store.selected_provisions.is_empty() {
    print_info("Nothing to clear");
    return Ok(());
  }

  let message = format!("Clear the current selection and {} pending change(s)?", pending);
  if !confirm(&message, force)? {
    print_info("Aborted");
    return Ok(());
  }

  ws.store.clear_selections();
  ws.save()?;
  print_success("Selections cleared");
  Ok(())
}
