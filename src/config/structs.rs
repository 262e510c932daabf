//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTPS listener, HTTP redirect listener and static file settings.
pub mod http_server_config;

/// Certificate chain and private key file paths.
pub mod certificate_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
