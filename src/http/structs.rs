/// Web root and HTTPS port as seen by the request handlers.
pub mod http_service_data;
