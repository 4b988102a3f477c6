//! Session persistence for the provisioning store.
//!
//! The store is written as a single JSON file under the data directory, keyed
//! by a fixed namespace:
//!
//! ```text
//! {data_dir}/provisioning-store.json
//! {
//!   "version": 1,
//!   "state": {
//!     "selectedStack": "node",
//!     "selectedProvisions": [...],
//!     "planActions": [...],
//!     "projectContext": { "isNewProject": true }
//!   }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::store::ProvisioningStore;

/// Namespace key the session is persisted under.
pub const SESSION_KEY: &str = "provisioning-store";

/// Current session file format version.
pub const SESSION_VERSION: u32 = 1;

/// Errors that can occur when reading or writing the session.
#[derive(Debug, Error)]
pub enum SessionError {
  #[error("failed to read session: {0}")]
  Read(#[source] io::Error),

  #[error("failed to write session: {0}")]
  Write(#[source] io::Error),

  #[error("failed to create session directory: {0}")]
  CreateDir(#[source] io::Error),

  #[error("failed to parse session: {0}")]
  Parse(#[source] serde_json::Error),

  #[error("failed to serialize session: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("unsupported session version: {0}")]
  UnsupportedVersion(u32),
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
  version: u32,
  state: ProvisioningStore,
}

#[derive(Serialize)]
struct SessionFileRef<'a> {
  version: u32,
  state: &'a ProvisioningStore,
}

/// Reads and writes the persisted [`ProvisioningStore`].
#[derive(Debug, Clone)]
pub struct SessionStore {
  path: PathBuf,
}

impl SessionStore {
  pub fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn exists(&self) -> bool {
    self.path.exists()
  }

  /// Load the persisted store.
  ///
  /// Returns a cleared store if no session has been saved yet.
  pub fn load(&self) -> Result<ProvisioningStore, SessionError> {
    let content = match fs::read_to_string(&self.path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = ?self.path, "no session file, starting fresh");
        return Ok(ProvisioningStore::new());
      }
      Err(e) => return Err(SessionError::Read(e)),
    };

    let file: SessionFile = serde_json::from_str(&content).map_err(SessionError::Parse)?;
    if file.version != SESSION_VERSION {
      return Err(SessionError::UnsupportedVersion(file.version));
    }

    debug!(path = ?self.path, actions = file.state.plan_actions.len(), "session loaded");
    Ok(file.state)
  }

  /// Persist the store.
  ///
  /// Uses atomic write (write to temp, then rename) to prevent corruption.
  pub fn save(&self, store: &ProvisioningStore) -> Result<(), SessionError> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent).map_err(SessionError::CreateDir)?;
      }
    }

    let file = SessionFileRef {
      version: SESSION_VERSION,
      state: store,
    };
    let content = serde_json::to_string_pretty(&file).map_err(SessionError::Serialize)?;

    let mut temp_name = self.path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = self.path.with_file_name(temp_name);

    fs::write(&temp_path, &content).map_err(SessionError::Write)?;
    fs::rename(&temp_path, &self.path).map_err(SessionError::Write)?;

    debug!(path = ?self.path, "session saved");
    Ok(())
  }

  /// Delete the session file. Missing files are fine.
  pub fn reset(&self) -> Result<(), SessionError> {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(SessionError::Write(e)),
    }
  }
}
