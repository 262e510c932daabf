use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// HTTPS port to listen to, overrides the config file.
    #[arg(long)]
    pub https_port: Option<u16>,
    /// HTTP port to listen to, which redirects to the HTTPS port.
    #[arg(long)]
    pub http_port: Option<u16>,
    /// Root directory for web file serving.
    #[arg(long)]
    pub webroot: Option<String>,
    /// Path to the certificate chain file.
    #[arg(long)]
    pub certfile: Option<String>,
    /// Path to the private key file.
    #[arg(long)]
    pub keyfile: Option<String>,

    /// Create a development self-signed key and certificate file, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,
}
