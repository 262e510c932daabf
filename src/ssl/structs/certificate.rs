use crate::ssl::structs::certificate_paths::CertificatePaths;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// Immutable once built. Cloning is cheap, the chain and key are shared.
#[derive(Clone)]
pub struct Certificate {
    pub(crate) certified_key: Arc<CertifiedKey>,
    pub(crate) primary_name: Option<String>,
    pub(crate) alternate_names: Vec<String>,
    pub(crate) loaded_at: chrono::DateTime<chrono::Utc>,
    pub(crate) paths: Option<CertificatePaths>,
}
