use serde::{Deserialize, Serialize};

use crate::catalog::ProvisionCatalogItem;
use crate::plan::PlanAction;

/// A provision chosen for the active configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedProvision {
  pub provision_id: String,
  pub label: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

impl SelectedProvision {
  pub fn new(provision_id: &str, label: &str, version: Option<&str>) -> Self {
    Self {
      provision_id: provision_id.to_string(),
      label: label.to_string(),
      version: version.map(str::to_string),
    }
  }

  /// Selection of a catalog item at its default version.
  pub fn from_catalog(item: &ProvisionCatalogItem) -> Self {
    Self::new(&item.id, &item.label, item.default_version.as_deref())
  }

  pub(crate) fn add_action(&self) -> PlanAction {
    PlanAction::Add {
      provision_id: self.provision_id.clone(),
      label: self.label.clone(),
      version: self.version.clone(),
    }
  }
}

/// Whether the session edits a new project or an existing one.
///
/// On the wire this is `{ "isNewProject": true }` or
/// `{ "projectId": "...", "isNewProject": false }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectContext", into = "RawProjectContext")]
pub enum ProjectContext {
  #[default]
  New,
  Existing { project_id: String },
}

impl ProjectContext {
  pub fn is_new_project(&self) -> bool {
    matches!(self, ProjectContext::New)
  }

  pub fn project_id(&self) -> Option<&str> {
    match self {
      ProjectContext::New => None,
      ProjectContext::Existing { project_id } => Some(project_id),
    }
  }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProjectContext {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  project_id: Option<String>,
  is_new_project: bool,
}

impl TryFrom<RawProjectContext> for ProjectContext {
  type Error = String;

  fn try_from(raw: RawProjectContext) -> Result<Self, Self::Error> {
    match (raw.is_new_project, raw.project_id) {
      (true, None) => Ok(ProjectContext::New),
      (true, Some(_)) => Err("projectId must be absent when isNewProject is true".to_string()),
      (false, Some(project_id)) => Ok(ProjectContext::Existing { project_id }),
      (false, None) => Err("projectId is required when isNewProject is false".to_string()),
    }
  }
}

impl From<ProjectContext> for RawProjectContext {
  fn from(context: ProjectContext) -> Self {
    match context {
      ProjectContext::New => Self {
        project_id: None,
        is_new_project: true,
      },
      ProjectContext::Existing { project_id } => Self {
        project_id: Some(project_id),
        is_new_project: false,
      },
    }
  }
}

/// Result of [`select_stack`](super::ProvisioningStore::select_stack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackChange {
  /// The stack was already selected; nothing changed.
  Unchanged,
  /// The stack was selected and seeded with its required provisions.
  Selected { required: Vec<String> },
  /// The id is not in the catalog. It is selected anyway, with no provisions.
  UnknownStack,
}

/// Result of [`toggle_provision`](super::ProvisioningStore::toggle_provision).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
  Added,
  Removed,
  /// Required provisions cannot be toggled; nothing changed.
  Required,
}

/// Result of [`update_provision_version`](super::ProvisioningStore::update_provision_version).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionChange {
  Updated { from: Option<String>, to: String },
  NotSelected,
  /// Already at the requested version; nothing changed.
  Unchanged,
}

/// What [`load_project_provisions`](super::ProvisioningStore::load_project_provisions) resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
  pub project_id: String,
  pub stack: String,
  /// Stored provision ids found in the catalog.
  pub loaded: Vec<String>,
  /// Required provisions missing from the stored list and added on load.
  pub required_added: Vec<String>,
  /// Stored provision ids not found in the catalog.
  pub skipped: Vec<String>,
}
