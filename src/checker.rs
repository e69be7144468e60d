//! The header check pipeline: normalize, fetch, classify, assemble.

use std::time::Duration;

use log::info;

use crate::config::CheckerConfig;
use crate::error_handling::{categorize_reqwest_error, CheckError, InitializationError};
use crate::fetch::fetch_target;
use crate::initialization::{build_client, init_client};
use crate::report::Report;
use crate::target::normalize_target;

/// Runs header checks with a shared, preconfigured HTTP client.
///
/// Cloning is cheap; clones share the client's connection pool. Checks are
/// independent and may run concurrently.
#[derive(Debug, Clone)]
pub struct Checker {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl Checker {
    /// Creates a checker from a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is out of range or the client cannot be built.
    pub fn new(config: CheckerConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self {
            client,
            default_timeout: config.timeout(),
        })
    }

    /// Timeout applied when a check does not pass its own.
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Checks one target.
    ///
    /// `target` is a bare domain or URL with surrounding whitespace already
    /// removed. Exactly one GET request is made; there are no retries.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidTarget`] if the target cannot be normalized
    /// and [`CheckError::Network`] if the request fails.
    pub async fn check(
        &self,
        target: &str,
        timeout: Option<Duration>,
    ) -> Result<Report, CheckError> {
        let url = normalize_target(target)?;
        let fetched = fetch_target(
            &self.client,
            &url,
            timeout.unwrap_or(self.default_timeout),
        )
        .await?;
        let report = Report::from_fetched(fetched);

        info!(
            "Checked {url} -> {} (status {}): {} found, {} missing, {} cookies",
            report.final_url,
            report.status_code,
            report.found.len(),
            report.missing.len(),
            report.cookies.len()
        );
        Ok(report)
    }
}

/// Checks one target with the default configuration.
///
/// Convenience wrapper that builds a fresh client per call; reuse a
/// [`Checker`] when running many checks.
///
/// # Errors
///
/// Returns [`CheckError::InvalidTarget`] if the target cannot be normalized
/// and [`CheckError::Network`] if the request fails.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), sec_headers::CheckError> {
/// let report = sec_headers::check("example.com", None).await?;
/// for key in report.missing.keys() {
///     println!("missing {key}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn check(target: &str, timeout: Option<Duration>) -> Result<Report, CheckError> {
    let url = normalize_target(target)?;
    let config = CheckerConfig::default();
    let client = build_client(&config).map_err(|source| CheckError::Network {
        url,
        kind: categorize_reqwest_error(&source),
        source,
    })?;
    Checker {
        client,
        default_timeout: config.timeout(),
    }
    .check(target, timeout)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_FRAME_OPTIONS};
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[tokio::test]
    async fn test_check_classifies_mock_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/")).respond_with(
                status_code(200)
                    .insert_header("Strict-Transport-Security", "max-age=100")
                    .insert_header("X-Frame-Options", "DENY"),
            ),
        );

        let checker = Checker::new(CheckerConfig::default()).unwrap();
        let target = format!("http://{}/ignored/path?q=1", server.addr());
        let report = checker.check(&target, None).await.unwrap();

        assert_eq!(report.status_code, 200);
        let found: Vec<&str> = report.found.keys().copied().collect();
        assert_eq!(
            found,
            vec![HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_FRAME_OPTIONS]
        );
        assert_eq!(report.missing.len(), 7);
        assert!(report.cookies.is_empty());
    }

    #[tokio::test]
    async fn test_check_rejects_invalid_target_before_fetching() {
        let checker = Checker::new(CheckerConfig::default()).unwrap();
        let err = checker.check("", None).await.unwrap_err();
        assert!(err.is_invalid_target());
    }

    #[tokio::test]
    async fn test_check_uses_per_call_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _accept = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let checker = Checker::new(CheckerConfig::default()).unwrap();
        let started = std::time::Instant::now();
        let err = checker
            .check(&format!("http://{addr}"), Some(Duration::from_millis(300)))
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_free_check_function() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .respond_with(status_code(404)),
        );

        let report = check(&format!("http://{}", server.addr()), None)
            .await
            .unwrap();
        assert_eq!(report.status_code, 404);
        assert!(report.found.is_empty());
    }

    #[test]
    fn test_checker_default_timeout() {
        let checker = Checker::new(CheckerConfig {
            timeout_seconds: 3,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(checker.default_timeout(), Duration::from_secs(3));
    }
}
