//! Common utilities and shared functionality.
//!
//! Logging setup and the log level parsing shared with configuration
//! validation.

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
