use crate::ssl::structs::certificate::Certificate;
use ahash::AHashMap;
use std::sync::Arc;

/// One generation of loaded certificates. Position 0 of `certificates` is
/// the default served to clients that send no server name. Never mutated
/// after construction.
pub struct CertificateTable {
    pub(crate) certificates: Vec<Arc<Certificate>>,
    pub(crate) names: AHashMap<String, Arc<Certificate>>,
    pub(crate) generation: u64,
    pub(crate) loaded_at: chrono::DateTime<chrono::Utc>,
}
