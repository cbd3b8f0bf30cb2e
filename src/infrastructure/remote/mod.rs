pub mod http_client;
pub mod redirect;

pub use http_client::{HttpGateway, HttpResponse, NetworkError};
