// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CmtError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CmtConfig;

/// Configuration file names tried in each directory, first hit wins.
const CONFIG_FILES: &[&str] = &["cmt.toml", ".cmt.toml", ".config/cmt.toml"];

/// Find the configuration file for the current directory.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file that applies to `start_dir`.
///
/// `cmt.toml`, `.cmt.toml` and `.config/cmt.toml` are tried in `start_dir`
/// and then in each parent up to the filesystem root, then in the home
/// directory. `<config_dir>/cmt/config.toml` (`~/.config` on Linux) is the
/// last resort. A project file always beats a per-user one.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    if let Some(found) = start_dir.ancestors().find_map(config_in) {
        return Some(found);
    }

    if let Some(found) = dirs::home_dir().as_deref().and_then(config_in) {
        return Some(found);
    }

    dirs::config_dir()
        .map(|dir| dir.join("cmt").join("config.toml"))
        .filter(|path| path.is_file())
}

fn config_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CmtConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CmtConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CmtConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmtError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmtError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CmtConfig> {
    let config: CmtConfig = toml::from_str(content).map_err(|e| {
        CmtError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    config.validate()?;
    Ok(config)
}
