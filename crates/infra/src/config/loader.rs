//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FLUME_CLIENT_ID`: OAuth client id (required)
//! - `FLUME_CLIENT_SECRET`: OAuth client secret (required)
//! - `FLUME_BASE_URL`: Service root (optional)
//! - `FLUME_TIMEOUT_SECS`: Request timeout in seconds (optional)
//!
//! ## File Locations
//! The loader probes, in the current working directory:
//! 1. `./flume.json` or `./flume.toml`
//! 2. `./config.json` or `./config.toml`

use std::path::{Path, PathBuf};

use flume_domain::{ClientConfig, FlumeError, Result};

pub const ENV_CLIENT_ID: &str = "FLUME_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "FLUME_CLIENT_SECRET";
pub const ENV_BASE_URL: &str = "FLUME_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "FLUME_TIMEOUT_SECS";

const CONFIG_FILE_NAMES: [&str; 4] = ["flume.json", "flume.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `FlumeError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `FlumeError::Config` if a required variable is missing or a value
/// is invalid.
pub fn load_from_env() -> Result<ClientConfig> {
    config_from_vars(|key| std::env::var(key).ok())
}

/// Build a configuration from an arbitrary variable source.
///
/// `lookup` returns the value of a variable, or `None` when unset.
///
/// # Errors
/// Same as [`load_from_env`].
pub fn config_from_vars<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| FlumeError::Config(format!("Missing required environment variable: {key}")))
    };

    let mut config = ClientConfig::new(required(ENV_CLIENT_ID)?, required(ENV_CLIENT_SECRET)?);

    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|value| !value.is_empty()) {
        config.base_url = base_url;
    }

    if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
        config.timeout_secs = timeout
            .trim()
            .parse::<u64>()
            .map_err(|e| FlumeError::Config(format!("Invalid timeout: {e}")))?;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// file extension.
///
/// # Errors
/// Returns `FlumeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FlumeError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FlumeError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FlumeError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// # Errors
/// Returns `FlumeError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FlumeError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FlumeError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(FlumeError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the current working directory for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_in(&cwd)
}

/// First standard config file name present in `dir`
pub fn probe_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.exists())
}
