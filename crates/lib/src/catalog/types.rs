//! Catalog entry types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named technology choice that scopes which provisions are selectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
  pub id: String,
  pub label: String,
  #[serde(default)]
  pub description: String,
}

/// Category of a provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProvisionCategory {
  CodeQuality,
  Testing,
  Observability,
  Database,
  Messaging,
  Deployment,
  Security,
}

impl ProvisionCategory {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProvisionCategory::CodeQuality => "code-quality",
      ProvisionCategory::Testing => "testing",
      ProvisionCategory::Observability => "observability",
      ProvisionCategory::Database => "database",
      ProvisionCategory::Messaging => "messaging",
      ProvisionCategory::Deployment => "deployment",
      ProvisionCategory::Security => "security",
    }
  }
}

impl fmt::Display for ProvisionCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

/// An add-on capability offered for one stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionCatalogItem {
  /// Id of the stack this provision belongs to.
  pub stack: String,
  pub id: String,
  pub label: String,
  #[serde(default)]
  pub description: String,
  pub category: ProvisionCategory,
  /// Selectable versions, newest first.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub versions: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default_version: Option<String>,
  /// Required provisions are always selected once their stack is chosen.
  #[serde(default)]
  pub required: bool,
}

impl ProvisionCatalogItem {
  /// Whether `version` is one of the selectable versions.
  ///
  /// Unversioned items accept nothing.
  pub fn offers_version(&self, version: &str) -> bool {
    self.versions.iter().any(|v| v == version)
  }
}

/// An existing project and the provisions persisted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub id: String,
  pub name: String,
  pub stack: String,
  /// Provision ids in the order they were stored.
  #[serde(default)]
  pub provisions: Vec<String>,
}
