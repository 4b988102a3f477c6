//! Stack and provision catalog.
//!
//! The catalog is read-only data: the stacks a project can be built on, the
//! provisions each stack offers, and the existing projects whose stored
//! provisioning can be loaded for editing. A sample catalog ships with the
//! crate; a custom one can be loaded from a JSON file with the same shape.
//!
//! # File Format
//!
//! ```json
//! {
//!   "stacks": [{ "id": "node", "label": "Node.js", "description": "..." }],
//!   "provisions": [
//!     {
//!       "stack": "node",
//!       "id": "jest",
//!       "label": "Jest",
//!       "category": "testing",
//!       "versions": ["29.7.0", "28.1.3"],
//!       "defaultVersion": "29.7.0",
//!       "required": false
//!     }
//!   ],
//!   "projects": [{ "id": "proj-002", "name": "Billing API", "stack": "node", "provisions": ["jest"] }]
//! }
//! ```

mod types;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use types::{Project, ProvisionCatalogItem, ProvisionCategory, Stack};

const SAMPLE_CATALOG: &str = include_str!("sample.json");

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// Failed to read the catalog file.
  #[error("failed to read catalog: {0}")]
  Read(#[source] io::Error),

  /// Failed to parse the catalog JSON.
  #[error("failed to parse catalog: {0}")]
  Parse(#[source] serde_json::Error),

  /// The catalog parsed but is inconsistent.
  #[error("invalid catalog: {0}")]
  Invalid(String),
}

/// The full set of stacks, provisions and projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
  #[serde(default)]
  pub stacks: Vec<Stack>,
  /// Provisions in catalog order.
  #[serde(default)]
  pub provisions: Vec<ProvisionCatalogItem>,
  #[serde(default)]
  pub projects: Vec<Project>,
}

impl Catalog {
  /// The sample catalog bundled with the crate.
  pub fn builtin() -> Result<Self, CatalogError> {
    Self::from_json(SAMPLE_CATALOG)
  }

  /// Load and validate a catalog file.
  pub fn load(path: &Path) -> Result<Self, CatalogError> {
    debug!(path = ?path, "loading catalog");
    let content = fs::read_to_string(path).map_err(CatalogError::Read)?;
    Self::from_json(&content)
  }

  /// Parse and validate a catalog from JSON text.
  pub fn from_json(content: &str) -> Result<Self, CatalogError> {
    let catalog: Catalog = serde_json::from_str(content).map_err(CatalogError::Parse)?;
    catalog.validate()?;
    Ok(catalog)
  }

  /// Check cross-references and uniqueness.
  pub fn validate(&self) -> Result<(), CatalogError> {
    let mut stack_ids = HashSet::new();
    for stack in &self.stacks {
      if !stack_ids.insert(stack.id.as_str()) {
        return Err(CatalogError::Invalid(format!("duplicate stack '{}'", stack.id)));
      }
    }

    let mut provision_keys = HashSet::new();
    for item in &self.provisions {
      if !stack_ids.contains(item.stack.as_str()) {
        return Err(CatalogError::Invalid(format!(
          "provision '{}' references unknown stack '{}'",
          item.id, item.stack
        )));
      }
      if !provision_keys.insert((item.stack.as_str(), item.id.as_str())) {
        return Err(CatalogError::Invalid(format!(
          "duplicate provision '{}' in stack '{}'",
          item.id, item.stack
        )));
      }
      if let Some(default) = &item.default_version {
        if !item.versions.is_empty() && !item.offers_version(default) {
          return Err(CatalogError::Invalid(format!(
            "provision '{}' default version '{}' is not in its version list",
            item.id, default
          )));
        }
      }
    }

    let mut project_ids = HashSet::new();
    for project in &self.projects {
      if !project_ids.insert(project.id.as_str()) {
        return Err(CatalogError::Invalid(format!("duplicate project '{}'", project.id)));
      }
      if !stack_ids.contains(project.stack.as_str()) {
        return Err(CatalogError::Invalid(format!(
          "project '{}' references unknown stack '{}'",
          project.id, project.stack
        )));
      }
    }

    Ok(())
  }

  pub fn stack(&self, id: &str) -> Option<&Stack> {
    self.stacks.iter().find(|s| s.id == id)
  }

  /// Provisions offered for a stack, in catalog order.
  pub fn provisions_for<'a>(&'a self, stack: &'a str) -> impl Iterator<Item = &'a ProvisionCatalogItem> + 'a {
    self.provisions.iter().filter(move |p| p.stack == stack)
  }

  pub fn provision(&self, stack: &str, id: &str) -> Option<&ProvisionCatalogItem> {
    self.provisions.iter().find(|p| p.stack == stack && p.id == id)
  }

  /// Required provisions of a stack, in catalog order.
  ///
  /// This is the single source of the required-provision rule: seeding a
  /// stack, guarding toggles and loading projects all go through it.
  pub fn required_for<'a>(&'a self, stack: &'a str) -> impl Iterator<Item = &'a ProvisionCatalogItem> + 'a {
    self.provisions_for(stack).filter(|p| p.required)
  }

  pub fn is_required(&self, stack: &str, id: &str) -> bool {
    self.required_for(stack).any(|p| p.id == id)
  }

  pub fn project(&self, id: &str) -> Option<&Project> {
    self.projects.iter().find(|p| p.id == id)
  }
}
