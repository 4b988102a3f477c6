use anyhow::{Result, bail};

use provisioner_lib::config::Settings;
use provisioner_lib::store::VersionChange;

use super::{Workspace, warn_unoffered_version};
use crate::output::{print_info, print_success};

pub fn cmd_set_version(settings: &Settings, id: &str, version: &str) -> Result<()> {
  let mut ws = Workspace::open(settings)?;

  if ws.store.is_selected(id) {
    if let Some(item) = ws.catalog_item(id) {
      warn_unoffered_version(item, version);
    }
  }

  match ws.store.update_provision_version(id, version) {
    VersionChange::Updated { from, to } => {
      print_success(&format!(
        "Updated {} from {} to {}",
        id,
        from.as_deref().unwrap_or("none"),
        to
      ));
      ws.save()
    }
    VersionChange::Unchanged => {
      print_info(&format!("{} is already at {}", id, version));
      Ok(())
    }
    VersionChange::NotSelected => bail!("Provision '{}' is not selected", id),
  }
}
