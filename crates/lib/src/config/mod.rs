//! Configuration loading.
//!
//! Settings come from, in order of precedence: explicit overrides (CLI flags),
//! environment variables, the optional `config.toml` in the config directory,
//! and built-in defaults.
//!
//! ```toml
//! # ~/.config/provisioner/config.toml
//! catalog = "catalogs/company.json"   # relative to the config directory
//! session = "/tmp/provisioning-store.json"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{Catalog, CatalogError};
use crate::consts::{CATALOG_ENV, SESSION_ENV};
use crate::platform::paths::{config_path, env_path, session_path};
use crate::session::SessionStore;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config '{path}': {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse config '{path}': {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
  /// Custom catalog JSON file.
  pub catalog: Option<PathBuf>,
  /// Session file location.
  pub session: Option<PathBuf>,
}

impl ConfigFile {
  /// Load a config file. A missing file yields the defaults.
  ///
  /// Relative paths inside the file are resolved against its directory.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = ?path, "no config file");
        return Ok(Self::default());
      }
      Err(source) => {
        return Err(ConfigError::Read {
          path: path.to_path_buf(),
          source,
        });
      }
    };

    let mut config: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.catalog = config.catalog.map(|p| base.join(p));
    config.session = config.session.map(|p| base.join(p));
    Ok(config)
  }
}

/// Explicit overrides, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub config: Option<PathBuf>,
  pub catalog: Option<PathBuf>,
  pub session: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  /// Custom catalog file; `None` means the built-in sample catalog.
  pub catalog: Option<PathBuf>,
  pub session: PathBuf,
}

impl Settings {
  /// Resolve settings from overrides, environment and the config file.
  pub fn resolve(overrides: Overrides) -> Result<Self, ConfigError> {
    let config_file = overrides.config.unwrap_or_else(config_path);
    let file = ConfigFile::load(&config_file)?;

    let catalog = overrides.catalog.or_else(|| env_path(CATALOG_ENV)).or(file.catalog);
    let session = overrides
      .session
      .or_else(|| env_path(SESSION_ENV))
      .or(file.session)
      .unwrap_or_else(session_path);

    debug!(catalog = ?catalog, session = ?session, "settings resolved");
    Ok(Self { catalog, session })
  }

  pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
    match &self.catalog {
      Some(path) => Catalog::load(path),
      None => Catalog::builtin(),
    }
  }

  pub fn session_store(&self) -> SessionStore {
    SessionStore::new(self.session.clone())
  }
}
