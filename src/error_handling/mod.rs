//! Error handling.
//!
//! This module provides:
//! - The error returned by a header check ([`CheckError`])
//! - Initialization errors for shared resources
//! - Categorization of HTTP client failures for messages and logs

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{CheckError, InitializationError, NetworkErrorKind};
