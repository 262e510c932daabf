//! Configuration management module.
//!
//! Loads, validates and saves the server configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **server**: HTTPS and HTTP ports, bind address, web root and worker settings
//! - **certificate**: PEM certificate chain and private key paths
//! - **sentry**: Error reporting configuration
//!
//! Command line flags override the file values, see [`Configuration::apply_cli`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pandaweb::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```
//!
//! [`Configuration::apply_cli`]: structs::configuration::Configuration::apply_cli

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
