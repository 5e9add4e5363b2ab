//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the session variables are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CLASSGRID_API_TOKEN`: Bearer token of the signed-in user (required)
//! - `CLASSGRID_ROLE`: `coordinator` or `admin` (required)
//! - `CLASSGRID_API_BASE_URL`: API base URL
//! - `CLASSGRID_API_TIMEOUT_MS`: Request timeout in milliseconds
//! - `CLASSGRID_LOG_LEVEL`: Default log level when `RUST_LOG` is unset
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./classgrid.json` or `./classgrid.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use classgrid_domain::{ApiConfig, ClassGridError, Config, Result, Role, SessionConfig};

/// Bearer token variable.
pub const ENV_API_TOKEN: &str = "CLASSGRID_API_TOKEN";
/// Role variable.
pub const ENV_ROLE: &str = "CLASSGRID_ROLE";
/// Base URL variable.
pub const ENV_API_BASE_URL: &str = "CLASSGRID_API_BASE_URL";
/// Timeout variable, in milliseconds.
pub const ENV_API_TIMEOUT_MS: &str = "CLASSGRID_API_TIMEOUT_MS";
/// Log level variable.
pub const ENV_LOG_LEVEL: &str = "CLASSGRID_LOG_LEVEL";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["classgrid.json", "classgrid.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the session
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ClassGridError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The token and role must be present; everything else falls back to its
/// default.
///
/// # Errors
/// Returns `ClassGridError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let token = env_var(ENV_API_TOKEN)?;
    let role = env_var(ENV_ROLE)?.parse::<Role>()?;

    let mut api = ApiConfig::default();
    if let Some(base_url) = env_opt(ENV_API_BASE_URL) {
        api.base_url = base_url;
    }
    if let Some(timeout) = env_opt(ENV_API_TIMEOUT_MS) {
        api.timeout_ms = parse_timeout(&timeout)?;
    }

    let log_level = env_opt(ENV_LOG_LEVEL)
        .unwrap_or_else(|| classgrid_domain::constants::DEFAULT_LOG_LEVEL.to_string());

    Ok(Config { api, session: SessionConfig { token, role }, log_level })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ClassGridError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClassGridError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClassGridError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ClassGridError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `ClassGridError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClassGridError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClassGridError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ClassGridError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory of
/// the running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ClassGridError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        ClassGridError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(0) => Err(ClassGridError::Config("Timeout must be greater than zero".to_string())),
        Ok(ms) => Ok(ms),
        Err(e) => Err(ClassGridError::Config(format!("Invalid timeout: {e}"))),
    }
}
