//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, defaults)
//! - The compiled-in table of security header metadata
//! - Checker configuration and CLI option types

mod cli;
mod constants;
mod headers;
mod types;

// Re-export all constants
pub use cli::{CheckArgs, Cli, Command, ServeArgs};
pub use constants::*;
pub use headers::*;
pub use types::{CheckerConfig, ConfigValidationError, LogFormat, LogLevel};
