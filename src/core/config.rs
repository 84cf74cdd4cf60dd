//! # Configuration
//!
//! Centralizes the few tunable settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.numis/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NumisConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory the coin lists are stored in. Defaults to `~/.numis`.
    pub data_dir: Option<PathBuf>,
    /// Log file location. Defaults to `<data_dir>/numis.log`.
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.numis/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".numis").join("config.toml"))
}

/// Load config from `~/.numis/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NumisConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NumisConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NumisConfig::default());
        }
    };

    if !path.exists() {
        generate_default_config(&path);
        return Ok(NumisConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NumisConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# numis configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# data_dir = "/home/you/.numis"            # Where the coin lists are stored
# log_file = "/home/you/.numis/numis.log"  # Or set NUMIS_LOG_FILE
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {e}");
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {e}");
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &NumisConfig) -> ResolvedConfig {
    let data_dir = std::env::var_os("NUMIS_DATA_DIR")
        .map(PathBuf::from)
        .or_else(|| config.general.data_dir.clone())
        .unwrap_or_else(default_data_dir);

    let log_file = std::env::var_os("NUMIS_LOG_FILE")
        .map(PathBuf::from)
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| data_dir.join("numis.log"));

    ResolvedConfig { data_dir, log_file }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".numis"))
        .unwrap_or_else(|| PathBuf::from(".numis"))
}
