//! TUI (Terminal User Interface) module
//!
//! Provides the interactive network configuration form.

pub mod form;

pub use form::NetworkFormTui;
