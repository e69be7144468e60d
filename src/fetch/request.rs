//! HTTP request for a normalized target.

use std::time::Duration;

use log::{debug, warn};

use super::FetchedResponse;
use crate::error_handling::{categorize_reqwest_error, CheckError};

/// Fetches `url` once with a GET request.
///
/// The client is expected to follow redirects, verify TLS certificates and
/// send the tool's User-Agent (see [`init_client`](crate::initialization::init_client)).
/// Any HTTP status, including 4xx and 5xx, counts as a successful fetch: the
/// headers of an error page are still worth reporting.
///
/// # Errors
///
/// Returns [`CheckError::Network`] on DNS, connection, TLS, redirect or
/// timeout failures.
pub async fn fetch_target(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchedResponse, CheckError> {
    debug!("GET {url} (timeout {}s)", timeout.as_secs_f64());

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| {
            let kind = categorize_reqwest_error(&source);
            warn!("Failed to fetch {url}: {kind}: {source}");
            CheckError::Network {
                url: url.to_string(),
                kind,
                source,
            }
        })?;

    let fetched = FetchedResponse::from_response(&response);
    debug!(
        "Response from {}: {} with {} headers",
        fetched.final_url,
        fetched.status_code,
        fetched.headers.len()
    );
    Ok(fetched)
}
