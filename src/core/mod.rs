//! Core logic module
//!
//! # Submodules
//!
//! - [`netplan`] - Netplan document model
//! - [`form`] - Form values and validation
//! - [`writer`] - Writing and applying the document
//! - [`settings`] - Settings file handling
//! - [`config`] - Terminal detection and configuration summaries

pub mod config;
pub mod form;
pub mod netplan;
pub mod settings;
pub mod writer;
