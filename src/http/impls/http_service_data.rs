use std::path::PathBuf;
use crate::config::structs::configuration::Configuration;
use crate::http::structs::http_service_data::HttpServiceData;

impl HttpServiceData {
    pub fn new(webroot: impl Into<PathBuf>, https_port: u16) -> Self {
        Self {
            webroot: webroot.into(),
            https_port
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(&config.server.webroot, config.server.https_port)
    }
}
