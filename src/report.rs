//! Report assembly.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::HEADER_SPECS;
use crate::fetch::FetchedResponse;
use crate::security::{classify_headers, Classification, FoundHeader, HeaderSpec, MissingHeader};

/// Outcome of checking one target.
///
/// Serializes to the JSON shape served by `POST /run`:
///
/// ```json
/// {
///   "status_code": 200,
///   "final_url": "https://example.com/",
///   "found": { "x-frame-options": { "value": "DENY", "meta": { "key": "x-frame-options", "...": "..." } } },
///   "missing": { "expect-ct": { "meta": { "key": "expect-ct", "...": "..." } } },
///   "set_cookie": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// HTTP status of the final response
    pub status_code: u16,
    /// URL of the final response after redirects
    pub final_url: String,
    /// Known security headers the response carried
    pub found: BTreeMap<&'static str, FoundHeader>,
    /// Known security headers the response lacked
    pub missing: BTreeMap<&'static str, MissingHeader>,
    /// Raw `Set-Cookie` values in the order received; empty if none
    #[serde(rename = "set_cookie")]
    pub cookies: Vec<String>,
}

/// One row of a report, in knowledge-base order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus<'a> {
    /// The header was present with this value
    Found(&'static HeaderSpec, &'a str),
    /// The header was absent
    Missing(&'static HeaderSpec),
}

impl Report {
    /// Combines fetch output and header classification.
    pub fn assemble(fetched: FetchedResponse, classification: Classification) -> Self {
        Self {
            status_code: fetched.status_code,
            final_url: fetched.final_url,
            found: classification.found,
            missing: classification.missing,
            cookies: classification.cookies,
        }
    }

    /// Classifies a fetched response and assembles the report.
    pub fn from_fetched(fetched: FetchedResponse) -> Self {
        let classification = classify_headers(&fetched.headers);
        Self::assemble(fetched, classification)
    }

    /// Iterates over every known header in knowledge-base order.
    pub fn statuses(&self) -> impl Iterator<Item = HeaderStatus<'_>> + '_ {
        HEADER_SPECS.iter().map(move |spec| match self.found.get(spec.key) {
            Some(found) => HeaderStatus::Found(spec, found.value.as_str()),
            None => HeaderStatus::Missing(spec),
        })
    }
}
