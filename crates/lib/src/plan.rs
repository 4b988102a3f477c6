//! Change plan rendering.
//!
//! Every mutation of the provisioning store appends a [`PlanAction`]. The log
//! is never compacted: toggling the same provision on and off twice leaves four
//! entries, because the plan shown for review is the full edit history of the
//! session.

use serde::{Deserialize, Serialize};

/// Placeholder for an absent version in UPDATE lines.
const NO_VERSION: &str = "none";

/// One recorded change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE", rename_all_fields = "camelCase")]
pub enum PlanAction {
  /// A provision was selected.
  Add {
    provision_id: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
  },
  /// A provision was deselected.
  Remove { provision_id: String, label: String },
  /// The version of a selected provision changed.
  Update {
    provision_id: String,
    label: String,
    #[serde(default)]
    from: Option<String>,
    to: String,
  },
}

impl PlanAction {
  /// Human-readable line for this action.
  pub fn describe(&self) -> String {
    match self {
      PlanAction::Add {
        label,
        version: Some(version),
        ..
      } => format!("ADD {} ({})", label, version),
      PlanAction::Add { label, version: None, .. } => format!("ADD {}", label),
      PlanAction::Remove { label, .. } => format!("REMOVE {}", label),
      PlanAction::Update { label, from, to, .. } => format!(
        "UPDATE {} from {} to {}",
        label,
        from.as_deref().unwrap_or(NO_VERSION),
        to
      ),
    }
  }
}

/// Render actions as newline-joined lines in recorded order.
///
/// An empty log renders as the empty string.
pub fn render_plan(actions: &[PlanAction]) -> String {
  actions.iter().map(PlanAction::describe).collect::<Vec<_>>().join("\n")
}

/// Per-kind counts of a plan log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
  pub adds: usize,
  pub removes: usize,
  pub updates: usize,
}

impl PlanSummary {
  pub fn of(actions: &[PlanAction]) -> Self {
    let mut summary = Self::default();
    for action in actions {
      match action {
        PlanAction::Add { .. } => summary.adds += 1,
        PlanAction::Remove { .. } => summary.removes += 1,
        PlanAction::Update { .. } => summary.updates += 1,
      }
    }
    summary
  }

  pub fn total(&self) -> usize {
    self.adds + self.removes + self.updates
  }

  pub fn is_empty(&self) -> bool {
    self.total() == 0
  }
}
