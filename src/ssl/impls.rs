//! Implementation blocks for certificate types.

/// Parsing of PEM/DER material and name extraction.
pub mod certificate;

/// Table construction and name resolution.
pub mod certificate_table;

/// Publishing, reloading and lookups.
pub mod certificate_store;

/// rustls `ResolvesServerCert` glue.
pub mod dynamic_certificate_resolver;
