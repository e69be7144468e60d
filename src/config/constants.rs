//! Configuration constants.
//!
//! This module defines the defaults and limits used by the checker, the CLI
//! and the hosting layer.

/// Default per-check timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for a configured timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// User-Agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "sec-headers-web/1.0";

/// Maximum number of redirect hops to follow before giving up.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum target length in characters.
/// Matches common browser and server URL limits.
pub const MAX_TARGET_LENGTH: usize = 2048;

/// Scheme assumed for targets given as a bare domain.
pub const DEFAULT_SCHEME: &str = "https";

/// Default bind address for `sec_headers serve`.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
