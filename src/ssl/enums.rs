//! Error enumerations for certificate loading and lookup.

/// Errors raised while loading or generating certificate material.
pub mod certificate_error;

/// Errors raised while resolving a certificate for a handshake.
pub mod lookup_error;
