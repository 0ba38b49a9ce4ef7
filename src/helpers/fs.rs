//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "ochra", "lab-sidepanel")
        .ok_or_else(|| Error::invalid("Could not determine project directories"))
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/lab-sidepanel/` or `$XDG_CONFIG_HOME/lab-sidepanel/`
/// - **macOS**: `~/Library/Application Support/org.ochra.lab-sidepanel/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\ochra\lab-sidepanel\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
