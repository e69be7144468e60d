//! HTTP client initialization.
//!
//! This module builds the HTTP client shared by every check.

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::CheckerConfig;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for header checks.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Default timeout from the config (individual checks may override it)
/// - Redirect following enabled (up to `max_redirects` hops)
/// - TLS certificate verification enabled (rustls backend)
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` if the config is out of range,
/// or `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_client(config: &CheckerConfig) -> Result<reqwest::Client, InitializationError> {
    config.validate()?;
    Ok(build_client(config)?)
}

/// Builds the client without validating the config first.
pub(crate) fn build_client(config: &CheckerConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .redirect(Policy::limited(config.max_redirects))
        .use_rustls_tls()
        .build()
}
