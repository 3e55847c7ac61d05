//! Default configuration values

/// Netplan file written by the form
pub const DEFAULT_NETPLAN_PATH: &str = "/etc/netplan/01-netcfg.yaml";

/// Netplan schema version written to every document
pub const NETPLAN_VERSION: u8 = 2;

/// Permission bits for the written file (netplan warns when it is world readable)
pub const DEFAULT_FILE_MODE: u32 = 0o600;

/// Command that activates the written configuration
pub const DEFAULT_APPLY_COMMAND: &str = "netplan";

/// Arguments passed to the apply command
pub const DEFAULT_APPLY_ARGS: &[&str] = &["apply"];

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
