//! Optional TOML configuration.
//!
//! Lookup order:
//! 1. `$SIM_CONFIG` set and non-empty → that file, which must exist
//! 2. `$HOME/.config/sim/config.toml` → used if present
//! 3. Otherwise built-in defaults
//!
//! The file is only ever read. Every table and field is optional; unknown
//! fields are rejected so typos surface instead of being ignored.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::platform::TapLocation;

/// Hold between the down and up halves of a gesture when none is given.
pub const DEFAULT_HOLD_MICROS: u64 = 100_000;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SIM_CONFIG";

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub timing: TimingConfig,
    pub injection: InjectionConfig,
    /// Named key aliases, e.g. `a_btn = 0x06`.
    pub keys: HashMap<String, u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub hold_micros: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            hold_micros: DEFAULT_HOLD_MICROS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectionConfig {
    pub tap: TapLocation,
}

impl Config {
    /// Looks up a `[keys]` alias, ignoring ASCII case.
    pub fn key_alias(&self, name: &str) -> Option<u16> {
        self.keys
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, &code)| code)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    /// Named by `$SIM_CONFIG`; a missing file is an error.
    Explicit(PathBuf),
    /// The per-user default location; a missing file means defaults.
    UserDefault(PathBuf),
    Builtin,
}

/// Loads the configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    match resolve_source(env::var_os(CONFIG_ENV_VAR), env::var_os("HOME")) {
        ConfigSource::Explicit(path) => load_from(&path),
        ConfigSource::UserDefault(path) if path.is_file() => load_from(&path),
        ConfigSource::UserDefault(path) => {
            log::debug!("config: {} not found, using defaults", path.display());
            Ok(Config::default())
        }
        ConfigSource::Builtin => Ok(Config::default()),
    }
}

/// Reads and parses the config file at `path`.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("config: loaded {}", path.display());
    Ok(config)
}

/// Picks the config source from the raw environment values.
///
/// Extracted from `load` so the lookup order can be unit-tested without
/// mutating process environment variables.
fn resolve_source(explicit: Option<OsString>, home: Option<OsString>) -> ConfigSource {
    if let Some(path) = explicit.filter(|v| !v.is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(path));
    }
    match home.filter(|v| !v.is_empty()) {
        Some(home) => ConfigSource::UserDefault(
            PathBuf::from(home)
                .join(".config")
                .join("sim")
                .join("config.toml"),
        ),
        None => ConfigSource::Builtin,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
