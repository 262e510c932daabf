use thiserror::Error;

/// Per-handshake lookup failure. Never fatal: the handshake is refused and
/// the listener keeps serving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Certificate store does not have any certificates")]
    NoCertificates,
    #[error("No certificate matches server name: {0}")]
    NoMatch(String),
}
