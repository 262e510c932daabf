use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::structs::Cli;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            server: HttpServerConfig {
                https_port: 443,
                http_port: 80,
                bind_ip: String::from("0.0.0.0"),
                webroot: String::from("public"),
                threads: None,
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15
            },
            certificate: CertificateConfig {
                cert_file: String::from("cert.pem"),
                key_file: String::from("key.pem")
            },
            sentry: SentryConfig::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Loads `path`. When it is missing or broken and `create` is set, a
    /// default file is written instead; the caller still gets an error so the
    /// operator can edit it before starting.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init()).map_err(ConfigurationError::SerializeError)?;
                match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(error)
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(e)
                    }
                }
            }
        }
    }

    /// Command line flags take precedence over the file.
    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(port) = args.https_port {
            self.server.https_port = port;
        }
        if let Some(port) = args.http_port {
            self.server.http_port = port;
        }
        if let Some(webroot) = &args.webroot {
            self.server.webroot = webroot.clone();
        }
        if let Some(cert_file) = &args.certfile {
            self.certificate.cert_file = cert_file.clone();
        }
        if let Some(key_file) = &args.keyfile {
            self.certificate.key_file = key_file.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }
        if self.server.https_port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("https_port has invalid port: 0")));
        }
        if self.server.http_port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("http_port has invalid port: 0")));
        }
        if self.server.https_port == self.server.http_port {
            return Err(ConfigurationError::ValidationError(format!("https_port and http_port are both {}", self.server.https_port)));
        }
        if self.server.bind_ip.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("bind_ip '{}' is not an IP address", self.server.bind_ip)));
        }
        if !Path::new(&self.server.webroot).is_dir() {
            return Err(ConfigurationError::ValidationError(format!("webroot '{}' is an invalid path", self.server.webroot)));
        }
        if self.certificate.cert_file.is_empty() || self.certificate.key_file.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("no certificate or key file given")));
        }
        Ok(())
    }

    pub fn threads(&self) -> usize {
        self.server.threads
            .map(|threads| threads as usize)
            .filter(|threads| *threads > 0)
            .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()))
    }
}
