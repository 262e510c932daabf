use crate::ssl::enums::lookup_error::LookupError;
use crate::ssl::ssl::{
    normalize_host_name,
    wildcard_candidate
};
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_table::CertificateTable;
use ahash::AHashMap;
use std::sync::Arc;

impl std::fmt::Debug for CertificateTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateTable")
            .field("generation", &self.generation)
            .field("certificates_count", &self.certificates.len())
            .field("names_count", &self.names.len())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateTable {
    /// Indexes every certificate under its normalized names. When two
    /// certificates claim the same name, the later one in `certificates`
    /// wins.
    pub fn build(certificates: Vec<Certificate>, generation: u64) -> Self {
        let certificates: Vec<Arc<Certificate>> = certificates.into_iter().map(Arc::new).collect();
        let mut names = AHashMap::with_capacity(certificates.len() * 2);
        for certificate in &certificates {
            for name in certificate.names() {
                let name = normalize_host_name(name);
                if name.is_empty() {
                    continue;
                }
                names.insert(name, Arc::clone(certificate));
            }
        }
        Self {
            certificates,
            names,
            generation,
            loaded_at: chrono::Utc::now(),
        }
    }

    /// Picks the certificate for a requested server name.
    ///
    /// No name (or an empty one) gets the default certificate. Otherwise an
    /// exact match is tried before a wildcard match on the left-most label.
    /// An unknown name is refused rather than answered with the default.
    pub fn resolve(&self, requested_name: Option<&str>) -> Result<Arc<Certificate>, LookupError> {
        let default = self.certificates.first().ok_or(LookupError::NoCertificates)?;
        let requested_name = match requested_name {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(Arc::clone(default)),
        };
        let name = normalize_host_name(requested_name);
        if let Some(certificate) = self.names.get(&name) {
            return Ok(Arc::clone(certificate));
        }
        wildcard_candidate(&name)
            .and_then(|wildcard| self.names.get(&wildcard))
            .map(Arc::clone)
            .ok_or_else(|| LookupError::NoMatch(requested_name.to_string()))
    }

    pub fn certificates(&self) -> &[Arc<Certificate>] {
        &self.certificates
    }

    pub fn default_certificate(&self) -> Option<&Arc<Certificate>> {
        self.certificates.first()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }
}
