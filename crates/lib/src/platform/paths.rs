use crate::consts::APP_NAME;
use crate::session::SESSION_KEY;
use std::path::PathBuf;

/// File name of the optional configuration file.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Reads a path from an environment variable, treating empty values as unset.
pub(crate) fn env_path(var: &str) -> Option<PathBuf> {
  std::env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> PathBuf {
  env_path("USERPROFILE").unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> PathBuf {
  env_path("HOME").unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the directory for configuration files for the application
#[cfg(windows)]
pub fn config_dir() -> PathBuf {
  env_path("APPDATA").unwrap_or_else(home_dir).join(APP_NAME)
}

/// Returns the directory for configuration files for the application
#[cfg(not(windows))]
pub fn config_dir() -> PathBuf {
  let config_home = env_path("XDG_CONFIG_HOME").unwrap_or_else(|| home_dir().join(".config"));
  config_home.join(APP_NAME)
}

/// Returns the directory for data files for the application
#[cfg(windows)]
pub fn data_dir() -> PathBuf {
  env_path("APPDATA").unwrap_or_else(home_dir).join(APP_NAME)
}

/// Returns the directory for data files for the application
#[cfg(not(windows))]
pub fn data_dir() -> PathBuf {
  let data_home = env_path("XDG_DATA_HOME").unwrap_or_else(|| home_dir().join(".local").join("share"));
  data_home.join(APP_NAME)
}

/// Default location of the persisted session.
pub fn session_path() -> PathBuf {
  data_dir().join(format!("{}.json", SESSION_KEY))
}

/// Default location of the configuration file.
pub fn config_path() -> PathBuf {
  config_dir().join(CONFIG_FILENAME)
}
