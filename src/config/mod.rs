//! Configuration layer for netcheck.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Every option has a built-in default, so netcheck runs with no
//! arguments at all.
//!
//! # CLI-Only vs TOML-Only Options
//!
//! Runtime flags (`--skip-fetch`, `--watch`, `--verbose`) are CLI-only.
//! The mount roots scanned for removable volumes (`storage.roots`) are
//! TOML-only; without them the platform's well-known roots are used.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{FetchSection, StorageSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
