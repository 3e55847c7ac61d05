//! Netform - terminal form for netplan interface configuration
//!
//! Collects interface settings in a terminal form, writes them as a netplan
//! document and runs the applier command to activate them.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface, the form itself and output formatting
//! - [`core`] - Document model, validation and the config writer
//! - [`infra`] - Infrastructure layer (filesystem, interface queries, processes)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
