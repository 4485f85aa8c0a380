mod schema;
mod validation;

pub use schema::{
    BasePointsConfig, BonusConfig, EliminationConfig, GradingConfig, PolicyConfig, ScoringConfig,
};
pub use validation::{validate_config, MAX_POINTS};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/attendance-grader/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("attendance-grader"))
}

/// Get the default config file path (~/.config/attendance-grader/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load policy configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to the built-in policies when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<PolicyConfig> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            explicit
        }
        None => match get_config_path() {
            Some(default_path) if default_path.exists() => default_path,
            _ => return Ok(PolicyConfig::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: PolicyConfig = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Outcome of `write_default_config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    AlreadyExists,
}

/// Write the built-in policies as YAML to `path`
///
/// Leaves an existing file alone unless `force` is set. The write goes through
/// atomic-write-file so a half-written config is never observed.
pub fn write_default_config(path: &Path, force: bool) -> Result<WriteOutcome> {
    if path.exists() && !force {
        return Ok(WriteOutcome::AlreadyExists);
    }

    let yaml = serde_saphyr::to_string(&PolicyConfig::default())
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(WriteOutcome::Written)
}
