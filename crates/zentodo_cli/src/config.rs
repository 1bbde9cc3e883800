//! Layered runtime configuration for the CLI surface.
//!
//! # Responsibility
//! - Merge defaults, the optional config file and environment overrides.
//!
//! # Invariants
//! - Environment values win over file values, file values over defaults.
//! - A malformed config file degrades to defaults; it is never fatal.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use zentodo_core::default_log_level;

/// Optional file shape at `<config_dir>/zentodo/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding the persisted slot file.
    pub data_dir: PathBuf,
    /// Level passed to the core logging bootstrap.
    pub log_level: String,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
}

/// Loads configuration. Returns the resolved config plus any warnings
/// produced while degrading a broken file to defaults.
pub fn load() -> (CliConfig, Vec<String>) {
    let mut warnings = Vec::new();

    let file = match config_file_path() {
        Some(path) if path.exists() => match std::fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<ConfigFile>(&raw) {
                Ok(file) => file,
                Err(err) => {
                    warnings.push(format!(
                        "ignoring malformed config file {}: {err}",
                        path.display()
                    ));
                    ConfigFile::default()
                }
            },
            Err(err) => {
                warnings.push(format!(
                    "ignoring unreadable config file {}: {err}",
                    path.display()
                ));
                ConfigFile::default()
            }
        },
        _ => ConfigFile::default(),
    };

    let config = merge(
        file,
        env_path("ZENTODO_DATA_DIR"),
        env_opt("ZENTODO_LOG_LEVEL"),
        env_path("ZENTODO_LOG_DIR"),
    );
    (config, warnings)
}

/// Applies the precedence rules: env over file over defaults.
fn merge(
    file: ConfigFile,
    env_data_dir: Option<PathBuf>,
    env_log_level: Option<String>,
    env_log_dir: Option<PathBuf>,
) -> CliConfig {
    let data_dir = env_data_dir
        .or(file.data_dir)
        .unwrap_or_else(default_data_dir);
    let log_dir = env_log_dir
        .or(file.log_dir)
        .unwrap_or_else(|| data_dir.join("logs"));
    let log_level = env_log_level
        .or(file.log_level)
        .unwrap_or_else(|| default_log_level().to_string());
    CliConfig {
        data_dir,
        log_level,
        log_dir,
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zentodo").join("config.toml"))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zentodo")
}

fn env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env_opt(key).map(PathBuf::from)
}
