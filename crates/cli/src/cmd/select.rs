use anyhow::Result;

use provisioner_lib::config::Settings;
use provisioner_lib::store::StackChange;

use super::Workspace;
use crate::output::{print_info, print_success, print_warning};

pub fn cmd_select(settings: &Settings, stack: &str) -> Result<()> {
  let mut ws = Workspace::open(settings)?;
  let discarded = ws.store.selected_provisions.len();

  match ws.store.select_stack(&ws.catalog, stack) {
    StackChange::Unchanged => {
      print_info(&format!("Stack '{}' is already selected", stack));
      return Ok(());
    }
    StackChange::Selected { required } => {
      print_success(&format!("Selected stack '{}'", stack));
      if !required.is_empty() {
        print_info(&format!("Required provisions: {}", required.join(", ")));
      }
    }
    StackChange::UnknownStack => {
      print_warning(&format!("Stack '{}' is not in the catalog; no provisions available", stack));
    }
  }

  if discarded > 0 {
    print_info(&format!("Discarded {} previous selection(s)", discarded));
  }

  ws.save()
}
