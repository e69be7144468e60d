//! Security header metadata and classification types.

use serde::Serialize;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// How much a missing header weakens a site's defences.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, DisplayMacro, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Defence in depth; absence is rarely exploitable on its own
    Low,
    /// Absence enables well-known UI or content-type attacks
    Medium,
    /// Absence materially weakens transport or script security
    High,
}

/// Static metadata describing one known security response header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSpec {
    /// Lowercase header name, as compared against responses
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// What the header does
    pub description: &'static str,
    /// What can go wrong without it
    pub impact: &'static str,
    /// How to add it
    pub remediation: &'static str,
    /// How serious its absence is
    pub severity: Severity,
}

/// A known header that the response carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundHeader {
    /// Raw observed value. Repeated headers are joined with `", "`.
    pub value: String,
    /// Metadata for the header
    pub meta: &'static HeaderSpec,
}

/// A known header that the response did not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingHeader {
    /// Metadata for the header
    pub meta: &'static HeaderSpec,
}
