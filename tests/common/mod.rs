//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated environment for running the netform binary
///
/// Settings are looked up in the temporary directory and the netplan file
/// lives there too, so nothing touches `/etc/netplan`.
pub struct TestEnv {
    /// Temporary directory holding settings and the netplan file
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new environment in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the netplan file used by [`TestEnv::run`]
    pub fn netplan_path(&self) -> PathBuf {
        self.dir.path().join("netplan").join("01-netcfg.yaml")
    }

    /// Write `config.toml` into the settings directory
    #[allow(dead_code)]
    pub fn write_settings(&self, content: &str) {
        std::fs::write(self.dir.path().join("config.toml"), content)
            .expect("Failed to write settings");
    }

    /// Write the netplan file directly
    #[allow(dead_code)]
    pub fn write_netplan(&self, content: &str) {
        let path = self.netplan_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write netplan file");
    }

    /// Read the netplan file
    #[allow(dead_code)]
    pub fn read_netplan(&self) -> String {
        std::fs::read_to_string(self.netplan_path()).expect("Failed to read netplan file")
    }

    /// Run netform against this environment's netplan file
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_netform"));
        cmd.current_dir(self.path());
        cmd.env("NETFORM_CONFIG_DIR", self.path());
        cmd.env("NETFORM_FILE", self.netplan_path());
        cmd.env_remove("NETFORM_LOG_FILE");
        cmd.env_remove("RUST_LOG");
        // Never take over the terminal in tests
        cmd.env("TERM", "dumb");
        cmd.args(args);
        cmd.output().expect("Failed to execute netform")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for stdout as a string
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Convenience for stderr as a string
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Settings that replace `netplan apply` with a shell snippet
#[allow(dead_code)]
pub fn shell_apply_settings(script: &str) -> String {
    format!("[apply]\ncommand = \"sh\"\nargs = [\"-c\", \"{script}\"]\n")
}
