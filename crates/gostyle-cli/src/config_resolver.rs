//! Locating and loading the gostyle configuration.
//!
//! The first match wins:
//!
//! 1. `--config <FILE>`
//! 2. `gostyle.toml` or `.gostyle.toml` in the checked directory
//! 3. `config.toml` in `$GOSTYLE_CONFIG_DIR`, else in `~/.gostyle/`
//! 4. Built-in defaults

use anyhow::{Context, Result};
use gostyle_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to the checked sources.
    Project(PathBuf),
    /// Found in the user-wide config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        match self {
            Self::Global(_) => tracing::info!("Using global config: {}", path.display()),
            _ => tracing::debug!("Using config: {}", path.display()),
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// File names looked up in the checked directory, in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["gostyle.toml", ".gostyle.toml"];

/// File name looked up in the global directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration for a run over `target`.
///
/// A file target is looked up from its parent directory.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    let project_dir = if target.is_file() {
        target.parent().unwrap_or(target)
    } else {
        target
    };
    resolve_inner(project_dir, explicit, global_config_dir())
}

fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Returns the global config directory: `$GOSTYLE_CONFIG_DIR`, else `~/.gostyle/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("GOSTYLE_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".gostyle"))
}
