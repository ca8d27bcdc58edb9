//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.profile-browser/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::content::DEFAULT_BASE_URL;
use crate::core::cycle::UserId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_user: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const BASE_URL_ENV: &str = "PROFILES_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub start_user: UserId,
    pub request_timeout: Duration,
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

/// Returns the path to `~/.profile-browser/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".profile-browser").join("config.toml"))
}

/// Load config from `~/.profile-browser/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BrowserConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BrowserConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BrowserConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<BrowserConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BrowserConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Profile Browser Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_user = 1                      # 1..=30

# [service]
# base_url = "https://dummyjson.com"  # Or set PROFILES_BASE_URL env var
# timeout_secs = 10
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
/// `cli_base_url` and `cli_start_user` come from CLI flags (None = not specified).
pub fn resolve(
    config: &BrowserConfig,
    cli_base_url: Option<&str>,
    cli_start_user: Option<u32>,
) -> ResolvedConfig {
    let env_base_url = std::env::var(BASE_URL_ENV).ok();
    resolve_with_env(config, env_base_url, cli_base_url, cli_start_user)
}

fn resolve_with_env(
    config: &BrowserConfig,
    env_base_url: Option<String>,
    cli_base_url: Option<&str>,
    cli_start_user: Option<u32>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or(env_base_url)
        .or_else(|| config.service.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Start user: CLI → config → first
    let start_user = match cli_start_user.or(config.general.start_user) {
        Some(raw) => UserId::new(raw).unwrap_or_else(|| {
            warn!("Start user {} is outside the pool, starting at 1", raw);
            UserId::FIRST
        }),
        None => UserId::FIRST,
    };

    let timeout_secs = config
        .service
        .timeout_secs
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    ResolvedConfig {
        base_url,
        start_user,
        request_timeout: Duration::from_secs(timeout_secs),
    }
}
