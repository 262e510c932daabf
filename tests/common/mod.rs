#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use pandaweb::ssl::ssl::generate_self_signed;
use pandaweb::ssl::structs::certificate::Certificate;

pub struct TestPemFiles {
    pub dir: TempDir,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl TestPemFiles {
    pub fn cert_path(&self) -> &str {
        self.cert_path.to_str().expect("temp path is UTF-8")
    }

    pub fn key_path(&self) -> &str {
        self.key_path.to_str().expect("temp path is UTF-8")
    }
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_test_pem(common_name: &str, alternate_names: &[&str]) -> (String, String) {
    let alternate_names: Vec<String> = alternate_names.iter().map(|name| name.to_string()).collect();
    generate_self_signed(common_name, &alternate_names).expect("Failed to generate certificate")
}

pub fn create_test_certificate(common_name: &str, alternate_names: &[&str]) -> Certificate {
    let (cert_pem, key_pem) = create_test_pem(common_name, alternate_names);
    Certificate::from_pem(cert_pem.as_bytes(), key_pem.as_bytes()).expect("Failed to parse certificate")
}

pub fn write_test_pem_files(common_name: &str, alternate_names: &[&str]) -> TestPemFiles {
    let dir = create_temp_dir();
    let (cert_pem, key_pem) = create_test_pem(common_name, alternate_names);
    let cert_path = dir.path().join("cert.pem");
    let key_path = dir.path().join("key.pem");
    fs::write(&cert_path, cert_pem).expect("Failed to write certificate");
    fs::write(&key_path, key_pem).expect("Failed to write key");
    TestPemFiles { dir, cert_path, key_path }
}
