//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Fetch configuration section
    #[serde(default)]
    pub fetch: FetchSection,

    /// Storage probe and watcher configuration
    #[serde(default)]
    pub storage: StorageSection,
}

/// Fetch configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchSection {
    /// Echo endpoint URL
    pub url: Option<String>,

    /// Total request timeout in seconds
    pub timeout: Option<u64>,
}

/// Storage configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    /// Marker file name
    pub marker_file: Option<String>,

    /// Storage poll interval in seconds
    pub poll_interval: Option<u64>,

    /// Mount roots to scan for removable volumes
    /// (empty = platform defaults; TOML-only, no CLI equivalent)
    #[serde(default)]
    pub roots: Vec<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# netcheck Configuration File

[fetch]
# Echo endpoint URL for the connectivity round-trip
# url = "https://postman-echo.com/get?foo1=bar1&foo2=bar2"

# Total request timeout in seconds (default: 300)
# timeout = 300

[storage]
# Marker file name written to the first removable volume
# (must be a bare file name, no path separators)
# marker_file = "bringup_marker.txt"

# Storage poll interval in seconds (default: 2)
# poll_interval = 2

# Mount roots to scan for removable volumes
# (defaults to the platform's well-known roots when empty)
# roots = ["/media", "/mnt"]
"#
    .to_string()
}
