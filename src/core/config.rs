//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.terra/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::client::DEFAULT_BASE_URL;
use crate::core::country::DisplayFormat;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TerraConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LinksConfig {
    pub encyclopedia_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub digit_separator: Option<char>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENCYCLOPEDIA_PREFIX: &str = "https://wikipedia.org/wiki/";
pub const DEFAULT_DIGIT_SEPARATOR: char = ',';

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub encyclopedia_prefix: String,
    pub format: DisplayFormat,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            encyclopedia_prefix: DEFAULT_ENCYCLOPEDIA_PREFIX.to_string(),
            format: DisplayFormat {
                digit_separator: DEFAULT_DIGIT_SEPARATOR,
            },
        }
    }
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

/// Returns the path to `~/.terra/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".terra").join("config.toml"))
}

/// Load config from `~/.terra/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TerraConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TerraConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TerraConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TerraConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TerraConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TerraConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Terra Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://restcountries.com/v3.1"   # Or set TERRA_BASE_URL env var

# [links]
# encyclopedia_prefix = "https://wikipedia.org/wiki/"

# [display]
# digit_separator = ","              # Population grouping, e.g. "." or " "
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &TerraConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_base_url, std::env::var("TERRA_BASE_URL").ok())
}

fn resolve_with_env(
    config: &TerraConfig,
    cli_base_url: Option<&str>,
    env_base_url: Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or(env_base_url)
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let encyclopedia_prefix = config
        .links
        .encyclopedia_prefix
        .clone()
        .unwrap_or_else(|| DEFAULT_ENCYCLOPEDIA_PREFIX.to_string());

    ResolvedConfig {
        base_url,
        encyclopedia_prefix,
        format: DisplayFormat {
            digit_separator: config
                .display
                .digit_separator
                .unwrap_or(DEFAULT_DIGIT_SEPARATOR),
        },
    }
}
