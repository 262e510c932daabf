use serde::{Deserialize, Serialize};
use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub server: HttpServerConfig,
    pub certificate: CertificateConfig,
    #[serde(default)]
    pub sentry: SentryConfig
}
