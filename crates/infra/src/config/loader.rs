//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `NUMEROLOG_API_URL` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NUMEROLOG_API_URL`: Backend origin (required)
//! - `NUMEROLOG_SUPPORT_URL`: External support link (optional)
//! - `NUMEROLOG_HTTP_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//! - `NUMEROLOG_HTTP_MAX_ATTEMPTS`: Attempts per request (default 1)
//!
//! ## File Locations
//! The loader probes `numerolog.{json,toml}` then `config.{json,toml}` in
//! the working directory and up to two parents, then next to the
//! executable.

use std::path::{Path, PathBuf};

use numerolog_domain::{ApiConfig, Config, NumerologyError, Result};

const API_URL_VAR: &str = "NUMEROLOG_API_URL";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["numerolog.json", "numerolog.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `NumerologyError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
/// - `NUMEROLOG_API_URL` is set but another variable does not parse
pub fn load() -> Result<Config> {
    if env_var(API_URL_VAR).is_err() {
        tracing::debug!("{} not set, trying file", API_URL_VAR);
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `NumerologyError::Config` if `NUMEROLOG_API_URL` is missing or a
/// numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var(API_URL_VAR)?;
    let defaults = Config::default();

    let timeout_secs = env_parse("NUMEROLOG_HTTP_TIMEOUT_SECS", defaults.api.timeout_secs)?;
    let max_attempts = env_parse("NUMEROLOG_HTTP_MAX_ATTEMPTS", defaults.api.max_attempts)?;
    let support_url =
        std::env::var("NUMEROLOG_SUPPORT_URL").ok().filter(|url| !url.trim().is_empty());

    Ok(Config { api: ApiConfig { base_url, timeout_secs, max_attempts }, support_url })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Format is detected by file extension.
///
/// # Errors
/// Returns `NumerologyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NumerologyError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NumerologyError::Config(
                "NUMEROLOG_API_URL is not set and no config file was found".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NumerologyError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// # Errors
/// Returns `NumerologyError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| NumerologyError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NumerologyError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(NumerologyError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    first_existing(&roots)
}

fn first_existing(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `NumerologyError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty()).ok_or_else(|| {
        NumerologyError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional numeric environment variable, `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| NumerologyError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}
