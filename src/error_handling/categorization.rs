//! Error categorization.

use std::error::Error as _;

use super::types::NetworkErrorKind;

/// Categorizes a `reqwest::Error` into a `NetworkErrorKind`.
///
/// TLS failures surface from reqwest as connect errors, so the source chain is
/// inspected for certificate and handshake messages before falling back to the
/// connect category.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> NetworkErrorKind {
    if error.is_timeout() {
        NetworkErrorKind::Timeout
    } else if error.is_redirect() {
        NetworkErrorKind::Redirect
    } else if error.is_connect() {
        if is_tls_failure(error) {
            NetworkErrorKind::Tls
        } else {
            NetworkErrorKind::Connect
        }
    } else if error.is_request() || error.is_body() || error.is_decode() || error.is_builder() {
        NetworkErrorKind::Request
    } else {
        NetworkErrorKind::Other
    }
}

fn is_tls_failure(error: &reqwest::Error) -> bool {
    let mut source = error.source();
    while let Some(err) = source {
        let message = err.to_string().to_lowercase();
        if message.contains("certificate") || message.contains("tls") || message.contains("handshake")
        {
            return true;
        }
        source = err.source();
    }
    false
}
