pub mod types;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use types::{Config, GitConfig, HostingConfig};

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Otherwise ~/.config/kickoff/config.toml,
    /// then ./kickoff.toml, then built-in defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
            return Self::load_from(&expanded);
        }

        for path in Self::search_paths().into_iter().flatten() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<Option<PathBuf>> {
        vec![
            dirs::home_dir().map(|p| p.join(".config/kickoff/config.toml")),
            Some(PathBuf::from("kickoff.toml")),
        ]
    }

    /// Parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
