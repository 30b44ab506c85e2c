//! Configuration schema for Packrat
//!
//! Configuration is stored at `~/.config/packrat/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// npm tool settings
    pub npm: NpmConfig,

    /// Cache settings
    pub cache: CacheConfig,

    /// Update scan settings
    pub update: UpdateConfig,
}

/// Settings for the external npm CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NpmConfig {
    /// Name or path of the npm executable
    pub binary: String,
}

impl Default for NpmConfig {
    fn default() -> Self {
        Self {
            binary: "npm".to_string(),
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root directory; defaults to the platform data dir when unset
    pub root: Option<PathBuf>,
}

/// Update scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Minimum hours between update scans within one process
    pub cooldown_hours: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self { cooldown_hours: 24 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.npm.binary, "npm");
        assert_eq!(config.cache.root, None);
        assert_eq!(config.update.cooldown_hours, 24);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[npm]\nbinary = \"pnpm\"\n").unwrap();
        assert_eq!(config.npm.binary, "pnpm");
        assert_eq!(config.update.cooldown_hours, 24);
    }
}
