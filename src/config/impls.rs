/// Loading, saving, defaults and validation of the root configuration.
pub mod configuration;

/// Display and Error implementations for configuration errors.
pub mod configuration_error;

/// Defaults for sentry reporting.
pub mod sentry_config;
