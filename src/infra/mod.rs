//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem, interface queries, and external processes.
//! This module is the only place where side effects occur.

pub mod applier;
pub mod dirs;
pub mod filesystem;
pub mod interfaces;
