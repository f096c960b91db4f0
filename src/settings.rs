//! # Configuration
//!
//! Settings for running a door controller with the reference collaborators
//! in [`crate::console`]. Sources are layered with the `config` crate, in
//! order of precedence (lowest first):
//!
//! 1. `<CONFIG_DIR>/default.toml` (optional)
//! 2. `<CONFIG_DIR>/<RUN_MODE>.toml` (optional, `RUN_MODE` defaults to `development`)
//! 3. Environment variables prefixed with `DOOR`, e.g. `DOOR__DOOR__NAME=lobby`
//!    or `DOOR__ACCESS__ALLOWED_IDS=1,2,3`
//!
//! `CONFIG_DIR` defaults to `config`. Every field has a default, so an empty
//! configuration is valid.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Complete set of settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub door: DoorSettings,
    pub access: AccessSettings,
    pub logging: LoggingSettings,
}

/// Identity of the controlled door.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DoorSettings {
    /// Name attached to every log line about this door
    pub name: String,
}

impl Default for DoorSettings {
    fn default() -> Self {
        Self {
            name: "door".to_string(),
        }
    }
}

/// Identifiers the allow-list validation grants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessSettings {
    pub allowed_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (e.g. "info", "door_control=debug")
    pub filter: String,
    /// Colorize console output
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: true,
        }
    }
}

impl Settings {
    /// Load settings from the configuration directory and the environment.
    pub fn new() -> Result<Self, SettingsError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".into());
        debug!(%run_mode, %config_dir, "Loading door settings");

        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            .add_source(
                Environment::with_prefix("DOOR")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("access.allowed_ids"),
            )
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Build settings from an inline TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let s = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
