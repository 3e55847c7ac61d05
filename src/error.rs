//! Error types for netform
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Interface enumeration errors
#[derive(Error, Debug)]
pub enum InterfaceError {
    /// The OS query itself failed
    #[error("Failed to list network interfaces: {error}")]
    Query { error: String },
}

/// Form validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No interface selected (or none available)
    #[error("No network interface selected")]
    NoInterface,

    /// Static address required when DHCP is off
    #[error("An IPv4 address is required when DHCP is disabled")]
    MissingAddress,

    /// Address is not IPv4 CIDR notation
    #[error("'{value}' is not an IPv4 address in CIDR format (e.g. 10.0.0.5/24)")]
    InvalidAddress { value: String },

    /// Gateway required when DHCP is off
    #[error("A gateway is required when DHCP is disabled")]
    MissingGateway,

    /// Gateway is not an IPv4 address
    #[error("'{value}' is not a valid IPv4 gateway address")]
    InvalidGateway { value: String },

    /// DNS entry is not an IP address
    #[error("'{value}' is not a valid DNS server address")]
    InvalidNameserver { value: String },
}

/// Document encode/decode errors
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to serialize the document
    #[error("Failed to serialize network configuration: {error}")]
    Serialize { error: String },

    /// Failed to parse an existing document
    #[error("Failed to parse network configuration '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// Existing document could not be read
    #[error(transparent)]
    Read(#[from] FilesystemError),
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Applier command errors
#[derive(Error, Debug)]
pub enum ApplyError {
    /// Command not found on PATH
    #[error("Apply command '{program}' not found in PATH")]
    NotFound { program: String },

    /// Command could not be started
    #[error("Failed to run '{program}': {error}")]
    Spawn { program: String, error: String },

    /// Command exited unsuccessfully
    #[error("'{program}' failed ({status}): {}", .output.trim())]
    Failed {
        program: String,
        status: ExitStatus,
        output: String,
    },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read settings file '{path}': {error}")]
    Read { path: String, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse settings file '{path}': {error}")]
    Parse { path: String, error: String },

    /// File mode is not an octal number
    #[error("Invalid file mode '{value}': expected octal digits such as \"600\"")]
    InvalidMode { value: String },
}

/// Outcome of submitting the form
///
/// The UI shows these in place and lets the user correct the input and retry.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Input rejected before anything was written
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Document could not be serialized
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Writing the configuration file failed
    #[error(transparent)]
    Io(#[from] FilesystemError),

    /// The applier command failed; the file has already been written
    #[error(transparent)]
    Apply(#[from] ApplyError),
}
