//! Certificate data structures.
//!
//! `Certificate` is one parsed chain and key pair, `CertificateTable` is an
//! immutable generation of them with its derived name index, and
//! `CertificateStore` holds the current table.

/// A parsed certificate chain, its signing key and the names it serves.
pub mod certificate;

/// Certificate and key file paths a certificate was loaded from.
pub mod certificate_paths;

/// Immutable snapshot of certificates with its name index.
pub mod certificate_table;

/// Store publishing certificate tables through an atomic swap.
pub mod certificate_store;

/// rustls resolver answering handshakes from a certificate store.
pub mod dynamic_certificate_resolver;
