//! Settings directory lookup
//!
//! Follows the XDG Base Directory Specification on Linux.
//!
//! `NETFORM_CONFIG_DIR` overrides the config directory.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::SETTINGS_FILE_NAME;

/// Environment variable name for the config directory override
pub const ENV_CONFIG_DIR: &str = "NETFORM_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "netform";

/// Directory provider for netform
#[derive(Debug, Clone)]
pub struct NetformDirs {
    config_dir: PathBuf,
}

impl NetformDirs {
    /// Create a new `NetformDirs` instance
    ///
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/netform` or `~/.config/netform`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Path to `config.toml` in the config directory
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for NetformDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_not_empty() {
        let dirs = NetformDirs::new();
        assert!(!dirs.config_dir().as_os_str().is_empty());
    }

    #[test]
    fn test_settings_path_is_under_config_dir() {
        let dirs = NetformDirs::new();
        assert!(dirs.settings_path().starts_with(dirs.config_dir()));
        assert!(dirs.settings_path().ends_with("config.toml"));
    }
}
