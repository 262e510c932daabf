use std::net::{IpAddr, SocketAddr};
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use pandaweb::common::common::setup_logging;
use pandaweb::config::structs::configuration::Configuration;
use pandaweb::http::http::{http_redirect_service, https_service};
use pandaweb::http::structs::http_service_data::HttpServiceData;
use pandaweb::ssl::ssl::{cert_gen, create_certificate_store, create_server_config_with_resolver};
use pandaweb::ssl::structs::certificate_store::CertificateStore;
use pandaweb::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use pandaweb::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_cli(&args);

    if let Err(error) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        match cert_gen(&args.selfsigned_domain, &args.selfsigned_keyfile, &args.selfsigned_certfile) {
            Ok(()) => exit(0),
            Err(error) => {
                error!("[CERTGEN] {error}");
                exit(1);
            }
        }
    }

    if let Err(error) = config.validate() {
        error!("[VALIDATE] {error}");
        exit(1);
    }

    let _sentry_guard: ClientInitGuard;
    if config.sentry.enabled {
        _sentry_guard = sentry::init((config.sentry.dsn.clone(), config.sentry.client_options()));
    }

    let cert_file = config.certificate.cert_file.clone();
    let key_file = config.certificate.key_file.clone();
    let certificate_store = create_certificate_store();
    if let Err(error) = certificate_store.load_from_files(&cert_file, &key_file) {
        error!("[CERTIFICATE] Failed to load TLS certificate: {error}");
        exit(1);
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let ip: IpAddr = config.server.bind_ip.parse().map_err(std::io::Error::other)?;
            let threads = config.threads();
            let data = Arc::new(HttpServiceData::from_config(&config));

            let resolver = Arc::new(DynamicCertificateResolver::new(certificate_store.clone()));
            let tls_config = create_server_config_with_resolver(resolver).map_err(std::io::Error::other)?;

            let (https_handle, https_future) = https_service(
                SocketAddr::new(ip, config.server.https_port),
                data.clone(),
                &config.server,
                threads,
                tls_config
            )?;
            let (http_handle, http_future) = http_redirect_service(
                SocketAddr::new(ip, config.server.http_port),
                data.clone(),
                &config.server,
                threads
            )?;

            let servers = tokio::spawn(async move {
                futures_util::future::try_join(https_future, http_future).await
            });

            let reload_handler = tokio_shutdown.clone();
            let reload_store = certificate_store.clone();
            info!("[BOOT] Starting thread for certificate reloads on SIGHUP...");
            tokio::spawn(async move {
                reload_on_hangup(reload_store, cert_file, key_file, reload_handler).await;
            });

            info!(
                "{} is running on https port {} and http port {}...",
                env!("CARGO_PKG_NAME"), config.server.https_port, config.server.http_port
            );

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    tokio_shutdown.handle().await;
                    https_handle.stop(true).await;
                    http_handle.stop(true).await;
                    info!("Server shutting down completed");
                    Ok::<(), std::io::Error>(())
                }
                result = servers => {
                    match result {
                        Ok(Ok(_)) => Ok(()),
                        Ok(Err(error)) => {
                            sentry::capture_error(&error);
                            error!("Failed to listen and serve: {error}");
                            exit(1);
                        }
                        Err(error) => {
                            error!("Server task failed: {error}");
                            exit(1);
                        }
                    }
                }
            }
        })
}

#[cfg(unix)]
async fn reload_on_hangup(store: Arc<CertificateStore>, cert_file: String, key_file: String, shutdown: Shutdown)
{
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(error) => {
            error!("[RELOAD] Unable to listen for SIGHUP: {error}");
            return;
        }
    };
    loop {
        tokio::select! {
            _ = hangup.recv() => {
                info!("[RELOAD] Reloading TLS certificate");
                let store = store.clone();
                let (cert_file, key_file) = (cert_file.clone(), key_file.clone());
                match tokio::task::spawn_blocking(move || store.load_from_files(&cert_file, &key_file)).await {
                    Ok(Ok(())) => info!("[RELOAD] TLS certificate reloaded"),
                    Ok(Err(error)) => {
                        sentry::capture_error(&error);
                        error!("[RELOAD] Failed to reload TLS certificate, keeping the previous one: {error}");
                    }
                    Err(error) => error!("[RELOAD] Reload task failed: {error}")
                }
            }
            _ = shutdown.handle() => {
                info!("[BOOT] Shutting down thread for certificate reloads...");
                return;
            }
        }
    }
}

#[cfg(not(unix))]
async fn reload_on_hangup(_store: Arc<CertificateStore>, _cert_file: String, _key_file: String, _shutdown: Shutdown)
{
    log::warn!("[RELOAD] SIGHUP is not available on this platform, certificate reloads are disabled");
}
