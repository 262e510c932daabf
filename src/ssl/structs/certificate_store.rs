use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_table::CertificateTable;
use arc_swap::ArcSwapOption;
use parking_lot::{Mutex, RwLock};

/// Readers load the current table without locking. Writers serialize on
/// `writer`, which also holds the last published generation number.
pub struct CertificateStore {
    pub(crate) current: ArcSwapOption<CertificateTable>,
    pub(crate) writer: Mutex<u64>,
    pub(crate) paths: RwLock<Option<CertificatePaths>>,
}
