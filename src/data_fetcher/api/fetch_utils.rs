//! Plain HTTP GET of the teletext document with error classification

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Downloads the body of `url` as text.
///
/// The body is returned unparsed so it can be persisted verbatim.
/// A single attempt is made; failures are mapped to:
/// * `AppError::NetworkTimeout` - the configured timeout elapsed
/// * `AppError::NetworkConnection` - the host could not be reached
/// * `AppError::HttpStatus` - the server answered with a non-2xx status
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Downloading teletext from url...");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() || e.is_request() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::HttpFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
        return Err(AppError::http_status(status.as_u16(), reason, url));
    }

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::network_connection(url, e.to_string())
    })?;

    debug!("Response length: {} bytes", text.len());
    Ok(text)
}
