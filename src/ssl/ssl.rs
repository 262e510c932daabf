use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use log::info;
use rcgen::{
    CertificateParams,
    DistinguishedName,
    DnType,
    KeyPair
};
use std::fs;
use std::sync::Arc;

pub fn create_certificate_store() -> Arc<CertificateStore> {
    Arc::new(CertificateStore::new())
}

/// Server config that asks `resolver` for a certificate on every handshake.
/// Always built on the ring provider.
pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let mut config = rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(resolver);
    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];
    Ok(config)
}

/// Lowercases a host name and drops one trailing root dot.
pub fn normalize_host_name(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

/// The wildcard pattern that would cover `name`, replacing its left-most
/// label: `foo.example.com` gives `*.example.com`. Single-label names have
/// none.
pub fn wildcard_candidate(name: &str) -> Option<String> {
    match name.split_once('.') {
        Some((label, parent)) if !label.is_empty() && !parent.is_empty() => {
            Some(format!("*.{}", parent))
        }
        _ => None,
    }
}

/// Generates a self-signed certificate and key, both PEM encoded.
pub fn generate_self_signed(
    common_name: &str,
    alternate_names: &[String],
) -> Result<(String, String), CertificateError> {
    let mut params = CertificateParams::new(alternate_names.to_vec())
        .map_err(|e| CertificateError::CertGenError(e.to_string()))?;
    let mut distinguished_name = DistinguishedName::new();
    distinguished_name.push(DnType::CommonName, common_name);
    params.distinguished_name = distinguished_name;
    let key_pair = KeyPair::generate()
        .map_err(|e| CertificateError::CertGenError(e.to_string()))?;
    let cert = params
        .self_signed(&key_pair)
        .map_err(|e| CertificateError::CertGenError(e.to_string()))?;
    Ok((cert.pem(), key_pair.serialize_pem()))
}

/// Writes a self-signed key and certificate for `localhost` plus `domain`.
pub fn cert_gen(domain: &str, key_file: &str, cert_file: &str) -> Result<(), CertificateError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }
    let (cert_pem, key_pem) = generate_self_signed(domain, &subject_alt_names)?;

    fs::write(key_file, key_pem)
        .map_err(|e| CertificateError::CertGenError(format!("{}: {}", key_file, e)))?;
    info!("[CERTGEN] The key file {} has been generated", key_file);
    fs::write(cert_file, cert_pem)
        .map_err(|e| CertificateError::CertGenError(format!("{}: {}", cert_file, e)))?;
    info!("[CERTGEN] The cert file {} has been generated", cert_file);

    info!("[CERTGEN] The files {} and {} has been generated, use them only for development reasons", key_file, cert_file);
    Ok(())
}
