//! XDG-style locations for the config file and the dictionary cache.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "tutor";

/// `$XDG_CONFIG_HOME/tutor`, or `~/.config/tutor`.
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// `$XDG_CACHE_HOME/tutor`, or `~/.cache/tutor`.
pub fn cache_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CACHE_HOME", ".cache")
}

fn xdg_dir(var: &str, fallback: &str) -> Result<PathBuf> {
    if let Ok(base) = std::env::var(var)
        && !base.is_empty()
    {
        return Ok(PathBuf::from(base).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(fallback).join(APP_DIR))
}
