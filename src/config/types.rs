//! Configuration types.
//!
//! This module defines the enums and structs used to configure logging and
//! the checker, independent of how they are parsed.

use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, MAX_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

/// Settings for a [`Checker`](crate::Checker).
///
/// # Examples
///
/// ```
/// use sec_headers::CheckerConfig;
///
/// let config = CheckerConfig {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Default per-check timeout in seconds, used when a check passes none
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum redirect hops to follow
    pub max_redirects: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
        }
    }
}

impl CheckerConfig {
    /// Default timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!(
                    "must be greater than 0 and at most {MAX_TIMEOUT_SECS} (got {})",
                    self.timeout_seconds
                ),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        if self.max_redirects > MAX_REDIRECT_HOPS {
            return Err(ConfigValidationError {
                field: "max_redirects",
                message: format!(
                    "must be at most {MAX_REDIRECT_HOPS} (got {})",
                    self.max_redirects
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_checker_config_default() {
        let config = CheckerConfig::default();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent, "sec-headers-web/1.0");
        assert_eq!(config.max_redirects, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = CheckerConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "timeout_seconds");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_excessive_timeout() {
        let config = CheckerConfig {
            timeout_seconds: MAX_TIMEOUT_SECS + 1,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "timeout_seconds");
    }

    #[test]
    fn test_validate_rejects_blank_user_agent() {
        let config = CheckerConfig {
            user_agent: "   ".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "user_agent");
        assert_eq!(err.to_string(), "invalid user_agent: must not be empty");
    }

    #[test]
    fn test_validate_rejects_too_many_redirects() {
        let config = CheckerConfig {
            max_redirects: MAX_REDIRECT_HOPS + 1,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "max_redirects");
    }
}
