use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::lookup_error::LookupError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::certificate_table::CertificateTable;
use arc_swap::ArcSwapOption;
use log::info;
use parking_lot::{
    Mutex,
    RwLock
};
use std::sync::Arc;

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.current.load();
        f.debug_struct("CertificateStore")
            .field("generation", &table.as_deref().map_or(0, |t| t.generation))
            .field("certificates_count", &table.as_deref().map_or(0, |t| t.len()))
            .field("paths", &*self.paths.read())
            .finish()
    }
}

impl Default for CertificateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::const_empty(),
            writer: Mutex::new(0),
            paths: RwLock::new(None),
        }
    }

    /// Replaces the whole table with `certificates`. An empty sequence is
    /// accepted and leaves the store without certificates.
    pub fn set_certificates<I>(&self, certificates: I)
    where
        I: IntoIterator<Item = Certificate>,
    {
        let certificates: Vec<Certificate> = certificates.into_iter().collect();
        let mut generation = self.writer.lock();
        self.publish(&mut generation, certificates);
    }

    /// Loads one certificate from PEM files and makes it the only entry of
    /// the table. On error the current table stays untouched.
    pub fn load_from_files(&self, cert_path: &str, key_path: &str) -> Result<(), CertificateError> {
        let certificate = Certificate::load_from_files(cert_path, key_path)?;
        let mut generation = self.writer.lock();
        self.publish(&mut generation, vec![certificate]);
        *self.paths.write() = Some(CertificatePaths {
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        });
        Ok(())
    }

    /// Loads again from the paths of the last successful `load_from_files`.
    pub fn reload(&self) -> Result<(), CertificateError> {
        let paths = self.paths().ok_or(CertificateError::NoPaths)?;
        self.load_from_files(&paths.cert_path, &paths.key_path)
    }

    pub fn get_certificate(&self, requested_name: Option<&str>) -> Result<Arc<Certificate>, LookupError> {
        let table = self.current.load();
        match table.as_deref() {
            None => Err(LookupError::NoCertificates),
            Some(table) => table.resolve(requested_name),
        }
    }

    /// The current table, for callers resolving several names against one
    /// generation.
    pub fn snapshot(&self) -> Option<Arc<CertificateTable>> {
        self.current.load_full()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().as_deref().is_some_and(|table| !table.is_empty())
    }

    pub fn generation(&self) -> u64 {
        self.current.load().as_deref().map_or(0, |table| table.generation)
    }

    pub fn paths(&self) -> Option<CertificatePaths> {
        self.paths.read().clone()
    }

    fn publish(&self, generation: &mut u64, certificates: Vec<Certificate>) {
        *generation += 1;
        let table = CertificateTable::build(certificates, *generation);
        info!(
            "[CERTIFICATE] Publishing generation {} with {} certificate(s) and {} name(s)",
            table.generation,
            table.len(),
            table.names.len()
        );
        self.current.store(Some(Arc::new(table)));
    }
}
