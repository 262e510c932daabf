/// Errors raised while loading, saving or validating configuration.
pub mod configuration_error;
