/// Application name used for config and data directories.
pub const APP_NAME: &str = "provisioner";

/// Environment variable that overrides the catalog file.
pub const CATALOG_ENV: &str = "PROVISIONER_CATALOG";

/// Environment variable that overrides the session file.
pub const SESSION_ENV: &str = "PROVISIONER_SESSION";
