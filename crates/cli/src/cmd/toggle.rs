use anyhow::Result;
use tracing::debug;

use provisioner_lib::catalog::ProvisionCatalogItem;
use provisioner_lib::config::Settings;
use provisioner_lib::store::Toggle;

use super::{Workspace, warn_unoffered_version};
use crate::output::{print_info, print_success, version_suffix};

/// Toggle a provision on or off.
///
/// Label and version fall back to the catalog entry for the selected stack,
/// then to the bare id.
pub fn cmd_toggle(settings: &Settings, id: &str, version: Option<String>, label: Option<String>) -> Result<()> {
  let mut ws = Workspace::open(settings)?;

  let item: Option<ProvisionCatalogItem> = ws.catalog_item(id).cloned();

  if item.is_none() {
    debug!(provision = %id, "toggling provision outside the catalog");
  }

  let label = label
    .or_else(|| item.as_ref().map(|i| i.label.clone()))
    .unwrap_or_else(|| id.to_string());
  let version = version.or_else(|| item.as_ref().and_then(|i| i.default_version.clone()));

  if let (Some(item), Some(v)) = (&item, &version) {
    warn_unoffered_version(item, v);
  }

  match ws.store.toggle_provision(&ws.catalog, id, &label, version.as_deref()) {
    Toggle::Added => print_success(&format!("Added {}{}", label, version_suffix(version.as_deref()))),
    Toggle::Removed => print_success(&format!("Removed {}", label)),
    Toggle::Required => {
      print_info(&format!("{} is required by the selected stack and cannot be removed", label));
      return Ok(());
    }
  }

  ws.save()
}
