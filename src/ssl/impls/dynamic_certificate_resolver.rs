use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use log::debug;
use rustls::server::{
    ClientHello,
    ResolvesServerCert
};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("generation", &self.store.generation())
            .field("has_certificate", &self.has_certificate())
            .finish()
    }
}

impl DynamicCertificateResolver {
    pub fn new(store: Arc<CertificateStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CertificateStore> {
        &self.store
    }

    pub fn has_certificate(&self) -> bool {
        self.store.is_loaded()
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        let server_name = client_hello.server_name();
        match self.store.get_certificate(server_name) {
            Ok(certificate) => Some(Arc::clone(certificate.certified_key())),
            Err(error) => {
                debug!("[CERTIFICATE] Refusing handshake for {:?}: {}", server_name, error);
                None
            }
        }
    }
}
