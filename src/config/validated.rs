//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config, or [`ValidatedConfig::load`] to also read the config
/// file named on the command line. CLI arguments take precedence over
/// TOML values, which take precedence over built-in defaults.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Echo endpoint URL for the connectivity round-trip
    pub url: Url,

    /// Total request timeout for the fetch
    pub fetch_timeout: Duration,

    /// Skip the HTTP round-trip (adapter report only)
    pub skip_fetch: bool,

    /// Marker file name written to the first removable volume
    pub marker_file: String,

    /// Mount roots to scan for removable volumes.
    /// `None` means the platform's default roots.
    pub storage_roots: Option<Vec<PathBuf>>,

    /// Storage poll interval for the watcher
    pub poll_interval: Duration,

    /// Keep running after diagnostics, reporting storage events
    pub watch: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots = self.storage_roots.as_ref().map_or_else(
            || "platform defaults".to_string(),
            |roots| format!("{} configured", roots.len()),
        );

        write!(
            f,
            "Config {{ url: {}, timeout: {}s, skip_fetch: {}, marker_file: {}, \
             storage_roots: {}, poll_interval: {}s, watch: {} }}",
            self.url,
            self.fetch_timeout.as_secs(),
            self.skip_fetch,
            self.marker_file,
            roots,
            self.poll_interval.as_secs(),
            self.watch,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is invalid
    /// - A duration value is zero
    /// - The marker file name is empty or contains path separators
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let fetch_timeout = Self::resolve_fetch_timeout(cli, toml)?;
        let marker_file = Self::resolve_marker_file(cli, toml)?;
        let poll_interval = Self::resolve_poll_interval(cli, toml)?;
        let storage_roots = Self::resolve_storage_roots(toml);

        Ok(Self {
            url,
            fetch_timeout,
            skip_fetch: cli.skip_fetch,
            marker_file,
            storage_roots,
            poll_interval,
            watch: cli.watch,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path
    /// (with `~` expanded to the home directory).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(&expand_tilde(path))?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.fetch.url.as_deref()))
            .unwrap_or(defaults::ECHO_URL);

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_fetch_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.fetch.timeout))
            .unwrap_or(defaults::FETCH_TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_marker_file(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let name = cli
            .marker_file
            .as_deref()
            .or_else(|| toml.and_then(|t| t.storage.marker_file.as_deref()))
            .unwrap_or(defaults::MARKER_FILE);

        if name.is_empty() {
            return Err(ConfigError::InvalidMarkerFile {
                value: name.to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        // The marker lands inside the volume root; a name with path
        // separators would escape it.
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ConfigError::InvalidMarkerFile {
                value: name.to_string(),
                reason: "must be a bare file name without path separators".to_string(),
            });
        }

        Ok(name.to_string())
    }

    fn resolve_poll_interval(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        let seconds = cli
            .poll_interval
            .or_else(|| toml.and_then(|t| t.storage.poll_interval))
            .unwrap_or(defaults::STORAGE_POLL_INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "poll_interval",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_storage_roots(toml: Option<&TomlConfig>) -> Option<Vec<PathBuf>> {
        let roots = toml.map(|t| &t.storage.roots)?;
        if roots.is_empty() {
            return None;
        }
        Some(roots.iter().map(|r| expand_tilde(Path::new(r))).collect())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Expands a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(stripped) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(stripped))
}
