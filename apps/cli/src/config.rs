//! # Configuration
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`)
//! 2. Environment variables (`STOCKROOM_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::Serialize;
use std::path::PathBuf;

/// File name of the database when no path is configured.
pub const DEFAULT_DB_FILE: &str = "inventory.db";

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,stockroom_db=info,stockroom_cli=info";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// SQLite file holding the products table.
    /// Default: `inventory.db` next to the executable
    pub database_path: PathBuf,

    /// tracing-subscriber filter directives.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: default_database_path(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DB_PATH`: database file
    /// - `RUST_LOG`: tracing filter
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("STOCKROOM_DB_PATH").filter(|p| !p.is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    /// Applies a `--db` flag when given.
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }
}

/// `inventory.db` in the executable's directory, or the working directory
/// when the executable cannot be located.
pub fn default_database_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DB_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}
