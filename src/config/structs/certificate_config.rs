use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CertificateConfig {
    pub cert_file: String,
    pub key_file: String,
}
