//! Centralized configuration paths for filmstrip
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/filmstrip/`
//! - Windows: `%APPDATA%\filmstrip\`
//!
//! This module is the single source of truth for config paths.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "filmstrip";

/// Base config directory for filmstrip
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/filmstrip`
///   - Else: `~/.config/filmstrip`
///
/// Windows:
///   - `%APPDATA%\filmstrip`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/filmstrip/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/filmstrip/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("no config directory available")?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    Ok(dir)
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    fs::create_dir_all(&logs)
        .with_context(|| format!("failed to create directory {}", logs.display()))?;
    Ok(logs)
}
