mod schema;

pub use schema::{ColorMode, Config};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Get the config directory path (~/.config/fitment/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("fitment"))
}

/// Get the default config file path (~/.config/fitment/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    read_config(&config_path)
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let mut config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    if let (Some(jobs_file), Some(base)) = (config.jobs_file.as_mut(), path.parent()) {
        if jobs_file.is_relative() && !jobs_file.as_os_str().is_empty() {
            *jobs_file = base.join(&*jobs_file);
            tracing::debug!(jobs_file = %jobs_file.display(), "resolved relative jobs_file");
        }
    }

    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref level) = config.log_level {
        if let Err(e) = EnvFilter::try_new(level) {
            errors.push(format!("log_level: invalid filter '{}' - {}", level, e));
        }
    }

    if let Some(ref jobs_file) = config.jobs_file {
        if jobs_file.as_os_str().is_empty() {
            errors.push("jobs_file: must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
