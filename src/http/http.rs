use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use actix_files::NamedFile;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use percent_encoding::percent_decode_str;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::structs::http_service_data::HttpServiceData;

pub fn https_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(http_service_static));
    })
}

pub fn http_redirect_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(http_service_redirect));
    })
}

/// Binds the HTTPS static file listener. Certificates come from
/// `tls_config`'s resolver on every handshake. The returned future does not
/// borrow `server_config`.
pub fn https_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
    server_config: &HttpServerConfig,
    threads: usize,
    tls_config: rustls::ServerConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>)>
{
    info!("[HTTPS] Starting server listener with SSL on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .configure(https_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout))
        .workers(threads)
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Binds the plain HTTP listener that only redirects to HTTPS.
pub fn http_redirect_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
    server_config: &HttpServerConfig,
    threads: usize
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>)>
{
    info!("[HTTP] Starting redirect listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .configure(http_redirect_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout))
        .workers(threads)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Serves a file below the web root. Directories answer with their
/// `index.html`, after a redirect that adds the trailing slash. Ranges and
/// conditional requests are handled by `NamedFile`.
#[tracing::instrument(level = "debug")]
pub async fn http_service_static(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let mut path = match resolve_static_path(&data.webroot, request.path()) {
        None => {
            debug!("[HTTPS] Rejected path {}", request.path());
            return http_service_not_found();
        }
        Some(path) => path
    };

    if tokio::fs::metadata(&path).await.is_ok_and(|metadata| metadata.is_dir()) {
        if !request.path().ends_with('/') {
            let location = match request.query_string() {
                "" => format!("{}/", request.path()),
                query => format!("{}/?{}", request.path(), query)
            };
            return HttpResponse::MovedPermanently()
                .insert_header((header::LOCATION, location))
                .finish();
        }
        path.push("index.html");
    }

    match NamedFile::open_async(&path).await {
        Ok(file) => file
            .disable_content_disposition()
            .into_response(&request),
        Err(_) => http_service_not_found()
    }
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_redirect(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let host = match request.headers().get(header::HOST).and_then(|host| host.to_str().ok()) {
        None => return http_service_not_found(),
        Some(host) => host
    };
    let path_and_query = request.uri()
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or("/");

    match https_redirect_location(host, path_and_query, data.https_port) {
        None => http_service_not_found(),
        Some(location) => HttpResponse::MovedPermanently()
            .insert_header((header::LOCATION, location))
            .finish()
    }
}

pub fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("404 page not found\n")
}

/// Maps a request path onto a path below `webroot` without touching the
/// filesystem. Paths that would leave the web root, or that do not decode as
/// UTF-8, yield `None`.
pub fn resolve_static_path(webroot: &Path, request_path: &str) -> Option<PathBuf>
{
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let mut path = webroot.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            segment if segment.contains(['\\', ':', '\0']) => return None,
            segment => path.push(segment)
        }
    }
    Some(path)
}

/// Builds `https://host[:port]/path?query` from a Host header, dropping any
/// port the client used and adding the HTTPS port unless it is 443.
pub fn https_redirect_location(host: &str, path_and_query: &str, https_port: u16) -> Option<String>
{
    let host = strip_port(host)?;
    let path_and_query = if path_and_query.starts_with('/') { path_and_query } else { "/" };
    if https_port == 443 {
        Some(format!("https://{}{}", host, path_and_query))
    } else {
        Some(format!("https://{}:{}{}", host, https_port, path_and_query))
    }
}

fn strip_port(host: &str) -> Option<&str>
{
    if host.starts_with('[') {
        let end = host.find(']')?;
        let rest = &host[end + 1..];
        if !rest.is_empty() && !rest.starts_with(':') {
            return None;
        }
        return Some(&host[..=end]);
    }
    let host = match host.split_once(':') {
        None => host,
        Some((_, port)) if port.contains(':') => return None,
        Some((name, _)) => name
    };
    if host.is_empty() { None } else { Some(host) }
}
