use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HttpServerConfig {
    pub https_port: u16,
    pub http_port: u16,
    pub bind_ip: String,
    pub webroot: String,
    pub threads: Option<u64>,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
}
