use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use std::fs::File;
use std::io::{
    BufRead,
    BufReader
};
use std::sync::Arc;
use x509_parser::extensions::GeneralName;

impl std::fmt::Debug for Certificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Certificate")
            .field("certs_count", &self.certified_key.cert.len())
            .field("primary_name", &self.primary_name)
            .field("alternate_names", &self.alternate_names)
            .field("paths", &self.paths)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl Certificate {
    /// Builds a certificate from a DER chain (leaf first) and its private key.
    ///
    /// The leaf is parsed for its subject CommonName and DNS
    /// SubjectAltNames, and the key is checked against the leaf's public key.
    pub fn from_der(
        chain: Vec<CertificateDer<'static>>,
        key: PrivateKeyDer<'static>,
    ) -> Result<Self, CertificateError> {
        let leaf = chain.first().ok_or(CertificateError::NoCertificateFound)?;
        let (primary_name, alternate_names) = Self::extract_names(leaf)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::CertifiedKeyError(e.to_string()))?;
        let certified_key = CertifiedKey::new(chain, signing_key);
        certified_key
            .keys_match()
            .map_err(|e| CertificateError::CertifiedKeyError(e.to_string()))?;
        Ok(Self {
            certified_key: Arc::new(certified_key),
            primary_name,
            alternate_names,
            loaded_at: chrono::Utc::now(),
            paths: None,
        })
    }

    pub fn from_pem(cert_pem: &[u8], key_pem: &[u8]) -> Result<Self, CertificateError> {
        let chain = Self::parse_chain(&mut &cert_pem[..])?;
        let key = Self::parse_private_key(&mut &key_pem[..])?;
        Self::from_der(chain, key)
    }

    /// Reads a PEM certificate chain file and a PEM private key file.
    pub fn load_from_files(cert_path: &str, key_path: &str) -> Result<Self, CertificateError> {
        let certs_file = File::open(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let chain = Self::parse_chain(&mut BufReader::new(certs_file))?;
        let key = Self::parse_private_key(&mut BufReader::new(key_file))?;
        let mut certificate = Self::from_der(chain, key)?;
        certificate.paths = Some(CertificatePaths {
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        });
        Ok(certificate)
    }

    pub fn certified_key(&self) -> &Arc<CertifiedKey> {
        &self.certified_key
    }

    pub fn chain(&self) -> &[CertificateDer<'static>] {
        &self.certified_key.cert
    }

    /// Subject CommonName of the leaf certificate.
    pub fn primary_name(&self) -> Option<&str> {
        self.primary_name.as_deref()
    }

    /// DNS SubjectAltNames of the leaf certificate, wildcards included.
    pub fn alternate_names(&self) -> &[String] {
        &self.alternate_names
    }

    /// Primary name followed by the alternate names, in table insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.primary_name
            .as_deref()
            .into_iter()
            .chain(self.alternate_names.iter().map(String::as_str))
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }

    pub fn paths(&self) -> Option<&CertificatePaths> {
        self.paths.as_ref()
    }

    fn parse_chain(reader: &mut dyn BufRead) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
        let chain: Vec<CertificateDer<'static>> = rustls_pemfile::certs(reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if chain.is_empty() {
            return Err(CertificateError::NoCertificateFound);
        }
        Ok(chain)
    }

    fn parse_private_key(reader: &mut dyn BufRead) -> Result<PrivateKeyDer<'static>, CertificateError> {
        rustls_pemfile::private_key(reader)
            .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
            .ok_or(CertificateError::NoKeyFound)
    }

    fn extract_names(leaf: &CertificateDer<'_>) -> Result<(Option<String>, Vec<String>), CertificateError> {
        let (_, x509) = x509_parser::parse_x509_certificate(leaf.as_ref())
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        let primary_name = x509
            .subject()
            .iter_common_name()
            .next()
            .and_then(|cn| cn.as_str().ok())
            .map(str::to_string);
        let alternate_names = x509
            .subject_alternative_name()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?
            .map(|san| {
                san.value
                    .general_names
                    .iter()
                    .filter_map(|name| match name {
                        GeneralName::DNSName(dns) => Some(dns.to_string()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok((primary_name, alternate_names))
    }
}
