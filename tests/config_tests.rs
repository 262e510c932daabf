mod common;

use std::fs;
use pandaweb::config::enums::configuration_error::ConfigurationError;
use pandaweb::config::structs::configuration::Configuration;

#[test]
fn test_config_save_and_load_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_path = config_path.to_str().unwrap();

    let mut config = Configuration::init();
    config.server.https_port = 8443;
    config.certificate.cert_file = String::from("/etc/pandaweb/fullchain.pem");
    Configuration::save_file(config_path, toml::to_string(&config).unwrap()).unwrap();

    let loaded = Configuration::load_file(config_path).unwrap();
    assert_eq!(loaded.server.https_port, 8443);
    assert_eq!(loaded.certificate.cert_file, "/etc/pandaweb/fullchain.pem");
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"

[server]
https_port = 8443
http_port = 8080
bind_ip = "127.0.0.1"
webroot = "/srv/www"
threads = 2
keep_alive = 30
request_timeout = 10
disconnect_timeout = 5

[certificate]
cert_file = "cert.pem"
key_file = "key.pem"

[sentry]
enabled = false
dsn = ""
debug = false
sample_rate = 1.0
max_breadcrumbs = 100
attach_stacktrace = true
send_default_pii = false
traces_sample_rate = 1.0
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.server.bind_ip, "127.0.0.1");
    assert_eq!(config.server.threads, Some(2));
    assert_eq!(config.threads(), 2);
    assert!(!config.sentry.enabled);
}

#[test]
fn test_config_missing_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("missing.toml");
    let result = Configuration::load_file(config_path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::IOError(_))));
}

#[test]
fn test_config_corrupt_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = [").unwrap();
    let result = Configuration::load_file(config_path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
}

#[test]
fn test_config_create_writes_defaults() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_file(config_path, false).is_err());
    assert!(fs::metadata(config_path).is_err(), "Config should not be created without the flag");

    assert!(Configuration::load_from_file(config_path, true).is_err());
    let created = Configuration::load_from_file(config_path, false).unwrap();
    assert_eq!(created.server.https_port, Configuration::init().server.https_port);
    assert_eq!(created.certificate.key_file, "key.pem");
}

#[test]
fn test_config_validation_with_real_webroot() {
    let temp_dir = common::create_temp_dir();
    let mut config = Configuration::init();
    config.server.webroot = temp_dir.path().to_str().unwrap().to_string();
    assert!(config.validate().is_ok());

    config.server.webroot = temp_dir.path().join("missing").to_str().unwrap().to_string();
    assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
}
