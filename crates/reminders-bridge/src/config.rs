//! Bridge configuration.
//!
//! Priority, highest first: CLI flags (and their clap `env` fallbacks),
//! `REMINDERS_BRIDGE_HELPER` / `REMINDERS_BRIDGE_TIMEOUT_SECS`, the JSON
//! config file (`<config_dir>/reminders-bridge/config.json`), compiled
//! defaults. A missing default file is fine; an explicit `--config` path
//! that cannot be read is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub const CONFIG_DIR_NAME: &str = "reminders-bridge";
pub const CONFIG_FILENAME: &str = "config.json";
pub const HELPER_ENV: &str = "REMINDERS_BRIDGE_HELPER";
pub const TIMEOUT_ENV: &str = "REMINDERS_BRIDGE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// On-disk shape; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    locale: Option<String>,
    osascript_path: Option<PathBuf>,
    helper_path: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default)]
struct EnvOverrides {
    helper_path: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        let timeout_secs = std::env::var(TIMEOUT_ENV).ok().and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| tracing::warn!(value = %raw, "ignoring invalid {TIMEOUT_ENV}"))
                .ok()
        });
        Self {
            helper_path: std::env::var_os(HELPER_ENV).map(PathBuf::from),
            timeout_secs,
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Locale code used when `--locale` is not given.
    pub locale: String,
    pub osascript_path: PathBuf,
    /// Recurrence-capable EventKit helper.
    pub helper_path: PathBuf,
    /// `None` waits for the adapter indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            osascript_path: PathBuf::from("osascript"),
            helper_path: PathBuf::from("reminders-helper"),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl BridgeConfig {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = load_config_file(explicit_path)?;
        Ok(Self::resolve(&file, &EnvOverrides::from_env()))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
    }

    fn resolve(file: &ConfigFile, env: &EnvOverrides) -> Self {
        let defaults = Self::default();
        let timeout_secs = env.timeout_secs.or(file.timeout_secs);
        Self {
            locale: file.locale.clone().unwrap_or(defaults.locale),
            osascript_path: file
                .osascript_path
                .clone()
                .unwrap_or(defaults.osascript_path),
            helper_path: env
                .helper_path
                .clone()
                .or_else(|| file.helper_path.clone())
                .unwrap_or(defaults.helper_path),
            timeout: match timeout_secs {
                Some(0) => None,
                Some(secs) => Some(Duration::from_secs(secs)),
                None => defaults.timeout,
            },
        }
    }
}

fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return parse_config(path, &contents);
    }

    let Some(path) = BridgeConfig::default_path() else {
        return Ok(ConfigFile::default());
    };
    match std::fs::read_to_string(&path) {
        Ok(contents) => parse_config(&path, &contents),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}

fn parse_config(path: &Path, contents: &str) -> Result<ConfigFile, ConfigError> {
    serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
