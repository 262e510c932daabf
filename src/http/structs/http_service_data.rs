use std::path::PathBuf;

#[derive(Debug)]
pub struct HttpServiceData {
    pub webroot: PathBuf,
    pub https_port: u16
}
