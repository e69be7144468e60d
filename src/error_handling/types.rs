//! Error type definitions.
//!
//! This module defines the errors a check can fail with and the errors raised
//! while setting up shared resources.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The checker configuration is out of range.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigValidationError),
}

/// Coarse category of a failed fetch.
///
/// Used only to phrase log lines and messages; callers see a single
/// [`CheckError::Network`] regardless of the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum NetworkErrorKind {
    /// No response within the timeout
    Timeout,
    /// DNS resolution or TCP connection failed
    Connect,
    /// TLS handshake or certificate verification failed
    Tls,
    /// Too many redirects or an invalid redirect
    Redirect,
    /// The request could not be sent or the response was malformed
    Request,
    /// Anything else
    Other,
}

impl std::fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NetworkErrorKind {
    /// Returns a human-readable string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkErrorKind::Timeout => "request timed out",
            NetworkErrorKind::Connect => "connection failed",
            NetworkErrorKind::Tls => "TLS error",
            NetworkErrorKind::Redirect => "redirect error",
            NetworkErrorKind::Request => "request error",
            NetworkErrorKind::Other => "network error",
        }
    }
}

/// Errors a header check can fail with.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The target is empty or cannot be turned into an http(s) URL with a host.
    #[error("Invalid target '{target}': {reason}")]
    InvalidTarget {
        /// The target as given
        target: String,
        /// Why it was rejected
        reason: String,
    },

    /// The request failed before a response was received.
    #[error("Failed to fetch {url}: {kind}")]
    Network {
        /// Normalized URL that was requested
        url: String,
        /// Coarse failure category
        kind: NetworkErrorKind,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },
}

impl CheckError {
    pub(crate) fn invalid_target(target: &str, reason: impl Into<String>) -> Self {
        CheckError::InvalidTarget {
            target: target.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error was caused by the user's input.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, CheckError::InvalidTarget { .. })
    }

    /// Returns `true` if the error happened on the network.
    pub fn is_network(&self) -> bool {
        matches!(self, CheckError::Network { .. })
    }
}
