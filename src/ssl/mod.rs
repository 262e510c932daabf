//! SSL/TLS certificate management module.
//!
//! This module selects the certificate presented during a TLS handshake from
//! the server name the client requests (SNI), and lets the certificate set be
//! replaced at runtime without restarting listeners or dropping connections.
//!
//! # Certificate Tables
//!
//! Every load builds a new immutable [`CertificateTable`]: the ordered list of
//! certificates (the first one is the default for clients that send no server
//! name) and an index from lowercased host names, wildcard patterns such as
//! `*.example.com` included, to certificates. Later certificates win on name
//! collisions, and exact names win over wildcards during lookup.
//!
//! # Hot Reload
//!
//! [`CertificateStore`] publishes tables through an atomic pointer swap.
//! Handshakes grab the current table without locking and resolve against it;
//! a reload in progress is invisible until it is complete. Reloads replace the
//! whole table, they never merge into it.
//!
//! # Example
//!
//! ```rust,ignore
//! use pandaweb::ssl::ssl::create_certificate_store;
//!
//! let store = create_certificate_store();
//! store.load_from_files("cert.pem", "key.pem")?;
//!
//! let certificate = store.get_certificate(Some("www.example.com"))?;
//! ```
//!
//! [`CertificateTable`]: structs::certificate_table::CertificateTable
//! [`CertificateStore`]: structs::certificate_store::CertificateStore

/// Error enumerations.
pub mod enums;

/// Certificate data structures.
pub mod structs;

/// Implementation blocks for certificate types.
pub mod impls;

/// Store construction, rustls wiring, host name helpers and certificate
/// generation.
#[allow(clippy::module_inception)]
pub mod ssl;
