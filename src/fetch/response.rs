//! Fetched response data.

use reqwest::header::HeaderMap;

/// What a check keeps from the HTTP response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// HTTP status code of the final response
    pub status_code: u16,
    /// URL of the final response after redirects
    pub final_url: String,
    /// All response headers, including every occurrence of repeated ones
    pub headers: HeaderMap,
}

impl FetchedResponse {
    /// Captures the parts of a response a check needs, without reading the body.
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self {
            status_code: response.status().as_u16(),
            final_url: response.url().to_string(),
            headers: response.headers().clone(),
        }
    }
}
