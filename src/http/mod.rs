//! HTTP/HTTPS services around the certificate store.
//!
//! # Services
//!
//! - **HTTPS**: serves static files from the web root. Its rustls config
//!   resolves certificates per handshake through the certificate store, so
//!   reloads apply to new connections without restarting the listener.
//! - **HTTP**: answers every request with a permanent redirect to the same
//!   host and path on the HTTPS port.
//!
//! Both listeners log requests through `actix_web::middleware::Logger` and
//! report errors to sentry when it is enabled.

/// Data structures shared with the request handlers.
pub mod structs;

/// Implementation blocks for HTTP service components.
pub mod impls;

/// Listener setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;

pub mod tests;
