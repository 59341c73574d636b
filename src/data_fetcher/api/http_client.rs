//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Creates the HTTP client used for the teletext download.
///
/// No timeout is applied unless one is configured.
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let builder = Client::builder().user_agent(USER_AGENT);
    match timeout_seconds {
        Some(seconds) => builder.timeout(Duration::from_secs(seconds)).build(),
        None => builder.build(),
    }
}
