//! Settings management
//!
//! Reads optional settings from `config.toml` in the config directory:
//! where the netplan file lives, its permission bits, and which command
//! activates it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    DEFAULT_APPLY_ARGS, DEFAULT_APPLY_COMMAND, DEFAULT_FILE_MODE, DEFAULT_NETPLAN_PATH,
};
use crate::error::SettingsError;
use crate::infra::applier::CommandApplier;
use crate::infra::dirs::NetformDirs;

/// Settings for netform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Netplan file settings
    #[serde(default)]
    pub netplan: NetplanSettings,

    /// Applier settings
    #[serde(default)]
    pub apply: ApplySettings,
}

/// Netplan file settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetplanSettings {
    /// Path of the file to write
    pub path: Option<PathBuf>,

    /// Octal permission bits, e.g. "600"
    pub file_mode: Option<String>,
}

/// Applier settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplySettings {
    /// Run the applier after writing
    pub enabled: Option<bool>,

    /// Program to run
    pub command: Option<String>,

    /// Arguments for the program
    pub args: Option<Vec<String>>,
}

impl Settings {
    /// Load settings from the config directory
    ///
    /// A missing file yields defaults; an invalid one is an error.
    pub fn load(dirs: &NetformDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.settings_path())
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        // Surface a bad mode at load time rather than on first write
        settings.file_mode()?;
        Ok(settings)
    }

    /// Effective netplan file path
    #[must_use]
    pub fn netplan_path(&self) -> PathBuf {
        self.netplan
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NETPLAN_PATH))
    }

    /// Effective permission bits for the written file
    pub fn file_mode(&self) -> Result<u32, SettingsError> {
        match &self.netplan.file_mode {
            Some(value) => u32::from_str_radix(value.trim_start_matches("0o"), 8)
                .ok()
                .filter(|mode| *mode <= 0o7777)
                .ok_or_else(|| SettingsError::InvalidMode {
                    value: value.clone(),
                }),
            None => Ok(DEFAULT_FILE_MODE),
        }
    }

    /// Whether the applier runs after writing
    #[must_use]
    pub fn apply_enabled(&self) -> bool {
        self.apply.enabled.unwrap_or(true)
    }

    /// Effective applier, or `None` when applying is disabled
    #[must_use]
    pub fn applier(&self) -> Option<CommandApplier> {
        if !self.apply_enabled() {
            return None;
        }

        let command = self
            .apply
            .command
            .clone()
            .unwrap_or_else(|| DEFAULT_APPLY_COMMAND.to_string());
        let args = self.apply.args.clone().unwrap_or_else(|| {
            DEFAULT_APPLY_ARGS.iter().map(|s| (*s).to_string()).collect()
        });
        Some(CommandApplier::new(command, args))
    }
}
