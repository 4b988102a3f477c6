//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding the session file, the
/// config directory and any custom catalog.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Session file path (isolated per test).
  pub fn session_path(&self) -> PathBuf {
    self.temp.path().join("data").join("provisioning-store.json")
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Parsed session file contents.
  pub fn session_json(&self) -> serde_json::Value {
    let content = std::fs::read_to_string(self.session_path()).unwrap();
    serde_json::from_str(&content).unwrap()
  }

  /// Get a pre-configured Command for the prov binary.
  ///
  /// Sets environment variables for isolated testing:
  /// - `PROVISIONER_SESSION`: Isolated session file
  /// - `XDG_CONFIG_HOME` / `APPDATA`: Isolated config directory
  /// - `XDG_DATA_HOME`: Isolated data directory
  pub fn prov_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("prov");
    cmd.env("PROVISIONER_SESSION", self.session_path());
    cmd.env_remove("PROVISIONER_CATALOG");
    cmd.env_remove("RUST_LOG");
    cmd.env("XDG_CONFIG_HOME", self.temp.path().join("config"));
    cmd.env("XDG_DATA_HOME", self.temp.path().join("data"));
    cmd.env("APPDATA", self.temp.path().join("config"));
    cmd
  }

  /// Run `prov <args>` and require success.
  pub fn run_ok(&self, args: &[&str]) {
    self.prov_cmd().args(args).assert().success();
  }
}
