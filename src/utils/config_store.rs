//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::{CONFIG_FILE_NAME, PRESET_ENV_VAR};
use crate::domain::config::{AppConfig, PanelPreset};
use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, is_development};

/// Path of the panel config file in the platform config directory
pub fn config_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);
    if is_development() {
        info!("Panel config file: {}", path.display());
    }
    Ok(path)
}

/// Load a TOML config file; a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content)
}

/// Save a TOML config file
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let content = config.to_toml_string()?;
    fs::write(path, content)?;
    Ok(())
}

/// Apply the preset environment override, if set
pub fn apply_env_override(config: AppConfig, preset: Option<&str>) -> Result<AppConfig> {
    match preset {
        Some(value) if !value.trim().is_empty() => {
            let preset: PanelPreset = value.parse()?;
            info!(%preset, "Panel preset overridden by {PRESET_ENV_VAR}");
            Ok(config.with_preset(preset))
        }
        _ => Ok(config),
    }
}

/// Load the application config, writing a default file on first run
pub fn load_config() -> Result<AppConfig> {
    let path = config_path()?;

    if !path.exists() {
        // Best effort; a read-only config dir should not block startup
        if let Err(e) = save_config_to(&path, &AppConfig::default()) {
            warn!("Could not write default config to {}: {e}", path.display());
        }
    }

    let config = load_config_from(&path)?;
    let env_preset = std::env::var(PRESET_ENV_VAR).ok();
    apply_env_override(config, env_preset.as_deref())
}
