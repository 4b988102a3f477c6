mod catalog;
mod clear;
mod load;
mod plan;
mod select;
mod status;
mod toggle;
mod version;

pub use catalog::{cmd_projects, cmd_provisions, cmd_stacks};
pub use clear::cmd_clear;
pub use load::cmd_load;
pub use plan::cmd_plan;
pub use select::cmd_select;
pub use status::cmd_status;
pub use toggle::cmd_toggle;
pub use version::cmd_set_version;

use anyhow::{Context, Result};
use provisioner_lib::catalog::{Catalog, ProvisionCatalogItem};
use provisioner_lib::config::Settings;
use provisioner_lib::session::SessionStore;
use provisioner_lib::store::ProvisioningStore;

use crate::output::print_warning;

/// Catalog plus the persisted store, opened for one command.
pub struct Workspace {
  pub catalog: Catalog,
  pub session: SessionStore,
  pub store: ProvisioningStore,
}

impl Workspace {
  pub fn open(settings: &Settings) -> Result<Self> {
    let catalog = settings.load_catalog().context("Failed to load catalog")?;
    let session = settings.session_store();
    let store = session
      .load()
      .with_context(|| format!("Failed to load session: {}", session.path().display()))?;
    Ok(Self {
      catalog,
      session,
      store,
    })
  }

  /// Catalog entry for `id` under the selected stack.
  pub fn catalog_item(&self, id: &str) -> Option<&ProvisionCatalogItem> {
    let stack = self.store.selected_stack.as_deref()?;
    self.catalog.provision(stack, id)
  }

  pub fn save(&self) -> Result<()> {
    self
      .session
      .save(&self.store)
      .with_context(|| format!("Failed to save session: {}", self.session.path().display()))
  }
}

/// Warn when `version` is not one of the catalog item's selectable versions.
///
/// Items without a version list accept anything.
pub fn warn_unoffered_version(item: &ProvisionCatalogItem, version: &str) {
  if !item.versions.is_empty() && !item.offers_version(version) {
    print_warning(&format!(
      "Version {} is not offered for {} (available: {})",
      version,
      item.label,
      item.versions.join(", ")
    ));
  }
}
