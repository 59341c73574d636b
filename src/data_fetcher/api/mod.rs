//! HTTP access to the teletext endpoint.

pub mod fetch_utils;
pub mod http_client;

pub use fetch_utils::fetch_text;
pub use http_client::create_http_client;
