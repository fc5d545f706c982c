pub mod api_errors;
pub mod http_client;
