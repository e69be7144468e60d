//! sec_headers library: security response header checks
//!
//! Fetches one page for a user-supplied domain or URL and reports which of a
//! fixed set of security-related response headers are present or missing,
//! with static metadata (description, impact, remediation, severity) for each.
//! It is a header hygiene aid for developers, not a security scanner: header
//! values are reported as-is and never graded.
//!
//! # Example
//!
//! ```no_run
//! use sec_headers::{Checker, CheckerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let checker = Checker::new(CheckerConfig::default())?;
//! let report = checker.check("example.com", None).await?;
//! println!(
//!     "{} returned {}: {} headers found, {} missing",
//!     report.final_url,
//!     report.status_code,
//!     report.found.len(),
//!     report.missing.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Checks are async and require a Tokio runtime.

#![warn(missing_docs)]

mod checker;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod report;
mod security;
pub mod server;
mod target;

// Re-export public API
pub use checker::{check, Checker};
pub use config::{find_spec, CheckerConfig, ConfigValidationError, LogFormat, LogLevel, HEADER_SPECS};
pub use error_handling::{CheckError, InitializationError, NetworkErrorKind};
pub use fetch::FetchedResponse;
pub use report::{HeaderStatus, Report};
pub use security::{
    classify_headers, classify_pairs, Classification, FoundHeader, HeaderSpec, MissingHeader,
    Severity,
};
pub use target::normalize_target;
