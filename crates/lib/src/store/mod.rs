//! The provisioning store.
//!
//! Holds the in-progress provisioning configuration: the selected stack, the
//! selected provisions and the plan log. Callers own a [`ProvisioningStore`]
//! value and pass the [`Catalog`] into the operations that need lookups.
//!
//! Unknown ids and no-op calls never fail; they leave the state as described
//! on each operation and report what happened through the returned outcome.

mod types;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::plan::{PlanAction, PlanSummary, render_plan};

pub use types::{LoadReport, ProjectContext, SelectedProvision, StackChange, Toggle, VersionChange};

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("project not found: {0}")]
  ProjectNotFound(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningStore {
  pub selected_stack: Option<String>,
  /// At most one entry per provision id.
  pub selected_provisions: Vec<SelectedProvision>,
  /// Append-only; only stack changes, loads and clears replace it.
  pub plan_actions: Vec<PlanAction>,
  pub project_context: ProjectContext,
}

impl ProvisioningStore {
  /// A cleared store for a new project.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn selected(&self, provision_id: &str) -> Option<&SelectedProvision> {
    self
      .selected_provisions
      .iter()
      .find(|p| p.provision_id == provision_id)
  }

  pub fn is_selected(&self, provision_id: &str) -> bool {
    self.selected(provision_id).is_some()
  }

  /// Select a stack, discarding all prior selections and plan history.
  ///
  /// The new selection is exactly the stack's required provisions at their
  /// default versions, each recorded as an ADD.
  pub fn select_stack(&mut self, catalog: &Catalog, stack_id: &str) -> StackChange {
    if self.selected_stack.as_deref() == Some(stack_id) {
      debug!(stack = %stack_id, "stack already selected");
      return StackChange::Unchanged;
    }

    self.selected_stack = Some(stack_id.to_string());
    self.selected_provisions = catalog
      .required_for(stack_id)
      .map(SelectedProvision::from_catalog)
      .collect();
    self.plan_actions = self
      .selected_provisions
      .iter()
      .map(SelectedProvision::add_action)
      .collect();

    if catalog.stack(stack_id).is_none() {
      warn!(stack = %stack_id, "selected unknown stack, no provisions available");
      return StackChange::UnknownStack;
    }

    let required: Vec<String> = self
      .selected_provisions
      .iter()
      .map(|p| p.provision_id.clone())
      .collect();
    info!(stack = %stack_id, required = required.len(), "stack selected");
    StackChange::Selected { required }
  }

  /// Add the provision if absent, remove it if present.
  ///
  /// Provisions required by the selected stack are left alone.
  pub fn toggle_provision(&mut self, catalog: &Catalog, id: &str, label: &str, version: Option<&str>) -> Toggle {
    if let Some(stack) = self.selected_stack.as_deref() {
      if catalog.is_required(stack, id) {
        debug!(stack = %stack, provision = %id, "ignoring toggle of required provision");
        return Toggle::Required;
      }
    }

    match self.selected_provisions.iter().position(|p| p.provision_id == id) {
      Some(index) => {
        self.selected_provisions.remove(index);
        self.plan_actions.push(PlanAction::Remove {
          provision_id: id.to_string(),
          label: label.to_string(),
        });
        info!(provision = %id, "provision removed");
        Toggle::Removed
      }
      None => {
        let selected = SelectedProvision::new(id, label, version);
        self.plan_actions.push(selected.add_action());
        self.selected_provisions.push(selected);
        info!(provision = %id, version = ?version, "provision added");
        Toggle::Added
      }
    }
  }

  /// Change the version of a selected provision and record an UPDATE.
  pub fn update_provision_version(&mut self, id: &str, version: &str) -> VersionChange {
    let Some(selected) = self.selected_provisions.iter_mut().find(|p| p.provision_id == id) else {
      debug!(provision = %id, "version update for unselected provision");
      return VersionChange::NotSelected;
    };

    if selected.version.as_deref() == Some(version) {
      return VersionChange::Unchanged;
    }

    let from = selected.version.replace(version.to_string());
    self.plan_actions.push(PlanAction::Update {
      provision_id: id.to_string(),
      label: selected.label.clone(),
      from: from.clone(),
      to: version.to_string(),
    });
    info!(provision = %id, from = ?from, to = %version, "provision version updated");
    VersionChange::Updated {
      from,
      to: version.to_string(),
    }
  }

  /// Replace the session with an existing project's stored provisioning.
  ///
  /// Stored ids are resolved against the project's stack at their catalog
  /// default versions. Ids missing from the catalog are skipped, and required
  /// provisions missing from the stored list are added. The plan log starts
  /// empty: a load is a baseline, not a change.
  pub fn load_project_provisions(&mut self, catalog: &Catalog, project_id: &str) -> Result<LoadReport, StoreError> {
    let project = catalog
      .project(project_id)
      .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))?;

    let mut selected: Vec<SelectedProvision> = Vec::new();
    let mut report = LoadReport {
      project_id: project.id.clone(),
      stack: project.stack.clone(),
      loaded: Vec::new(),
      required_added: Vec::new(),
      skipped: Vec::new(),
    };

    for provision_id in &project.provisions {
      if selected.iter().any(|p| &p.provision_id == provision_id) {
        continue;
      }
      match catalog.provision(&project.stack, provision_id) {
        Some(item) => {
          selected.push(SelectedProvision::from_catalog(item));
          report.loaded.push(provision_id.clone());
        }
        None => {
          warn!(project = %project.id, provision = %provision_id, "stored provision not in catalog, skipping");
          report.skipped.push(provision_id.clone());
        }
      }
    }

    for item in catalog.required_for(&project.stack) {
      if !selected.iter().any(|p| p.provision_id == item.id) {
        selected.push(SelectedProvision::from_catalog(item));
        report.required_added.push(item.id.clone());
      }
    }

    self.selected_stack = Some(project.stack.clone());
    self.selected_provisions = selected;
    self.plan_actions.clear();
    self.project_context = ProjectContext::Existing {
      project_id: project.id.clone(),
    };

    info!(
      project = %project.id,
      stack = %project.stack,
      loaded = report.loaded.len(),
      skipped = report.skipped.len(),
      "project provisions loaded"
    );
    Ok(report)
  }

  /// Reset to the initial new-project state.
  pub fn clear_selections(&mut self) {
    *self = Self::new();
    info!("selections cleared");
  }

  /// The plan log rendered as newline-joined lines.
  pub fn generate_plan(&self) -> String {
    render_plan(&self.plan_actions)
  }

  pub fn plan_summary(&self) -> PlanSummary {
    PlanSummary::of(&self.plan_actions)
  }
}
