//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static feature flag set, keyed by flag name.
    #[serde(default)]
    pub flags: BTreeMap<String, FlagConfig>,

    /// Browser-owned values (e.g. `locale`, `pdfViewer`) written to the
    /// persistent store on every run. Unchanged values are not rewritten.
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,

    /// Translation templates, keyed by message name.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,

    #[serde(default)]
    pub host: HostConfig,

    /// Per-surface "extension is the default PDF handler" answers.
    #[serde(default)]
    pub default_handler: BTreeMap<String, bool>,
}

/// Persistent state storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON state file. `~` is expanded.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_path() -> String {
    dirs::home_dir()
        .map(|h| h.join(".surfacegate").join("state.json"))
        .unwrap_or_else(|| std::path::PathBuf::from(".surfacegate/state.json"))
        .display()
        .to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Also write daily-rotated log files.
    #[serde(default)]
    pub file_logging: bool,

    /// Directory for log files. Defaults to `~/.surfacegate/logs`.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_logging: false,
            directory: None,
        }
    }
}

/// A statically configured feature flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Raw JSON metadata, kept as text so malformed payloads reach the engine as-is.
    #[serde(default)]
    pub metadata: Option<String>,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            metadata: None,
        }
    }
}

/// Extension host facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Extension runtime id; absent means the identity cannot be resolved.
    #[serde(default)]
    pub extension_id: Option<String>,

    /// Per-surface "competing add-on is default" status.
    #[serde(default)]
    pub add_on_default: BTreeMap<String, bool>,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
