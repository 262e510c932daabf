//! # Pandaweb
//!
//! A small static HTTPS web server whose certificates are picked per
//! handshake from the requested server name, and can be swapped at runtime.
//!
//! ## Overview
//!
//! The heart of the crate is the certificate store in [`ssl`]. It keeps an
//! immutable table of certificates indexed by host name (wildcards included)
//! and replaces the whole table atomically on reload. TLS handshakes look up
//! the certificate for the client's SNI name without taking a lock, and a
//! reload never exposes a half-built table.
//!
//! ## Features
//!
//! - **SNI Selection**: exact names first, then `*.domain` wildcards; clients
//!   without SNI get the first certificate
//! - **Fail Closed**: unknown server names are refused instead of being served
//!   the default certificate
//! - **Hot Reload**: `SIGHUP` reloads the certificate files without dropping
//!   connections
//! - **Static Files**: HTTPS file serving from a web root, with a plain HTTP
//!   listener redirecting to it
//! - **Monitoring**: Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pandaweb::ssl::ssl::{create_certificate_store, create_server_config_with_resolver};
//! use pandaweb::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
//!
//! let store = create_certificate_store();
//! store.load_from_files("cert.pem", "key.pem")?;
//!
//! let resolver = Arc::new(DynamicCertificateResolver::new(store.clone()));
//! let tls_config = create_server_config_with_resolver(resolver)?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTPS static file service and HTTP redirect service
//! - [`ssl`] - Certificate store, SNI resolution and hot reload
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files,
/// with command line overrides.
pub mod config;

/// HTTP/HTTPS services.
///
/// Static file serving over HTTPS and the plain HTTP redirect listener.
pub mod http;

/// SSL/TLS certificate management module.
///
/// Provides the certificate store, hot-reloading, and SNI-based certificate
/// resolution for rustls.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
