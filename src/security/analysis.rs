//! Classification of response headers against the header knowledge base.

use std::collections::{BTreeMap, HashMap};

use reqwest::header::HeaderMap;

use super::{FoundHeader, MissingHeader};
use crate::config::{HEADER_SET_COOKIE, HEADER_SPECS};

/// Result of comparing one response's headers against [`HEADER_SPECS`].
///
/// `found` and `missing` always partition the table: every known header key
/// appears in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Known headers present in the response, keyed by lowercase name
    pub found: BTreeMap<&'static str, FoundHeader>,
    /// Known headers absent from the response, keyed by lowercase name
    pub missing: BTreeMap<&'static str, MissingHeader>,
    /// Every `Set-Cookie` value, in the order received
    pub cookies: Vec<String>,
}

/// Classifies a response header map.
///
/// Values that are not valid UTF-8 are decoded lossily. Every occurrence of a
/// repeated header is kept (see [`classify_pairs`]).
pub fn classify_headers(headers: &HeaderMap) -> Classification {
    classify_pairs(
        headers
            .iter()
            .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes()))),
    )
}

/// Classifies raw `(name, value)` header pairs in the order they were received.
///
/// Names are compared case-insensitively. When a known header occurs more than
/// once, its reported value is all occurrences joined with `", "`. `Set-Cookie`
/// values are never joined; each occurrence becomes one entry in `cookies`.
pub fn classify_pairs<I, N, V>(pairs: I) -> Classification
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: Into<String>,
{
    let mut lookup: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in pairs {
        lookup
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    let mut classification = Classification {
        cookies: lookup.remove(HEADER_SET_COOKIE).unwrap_or_default(),
        ..Default::default()
    };

    for spec in HEADER_SPECS.iter() {
        match lookup.get(spec.key) {
            Some(values) => {
                classification.found.insert(
                    spec.key,
                    FoundHeader {
                        value: values.join(", "),
                        meta: spec,
                    },
                );
            }
            None => {
                classification
                    .missing
                    .insert(spec.key, MissingHeader { meta: spec });
            }
        }
    }

    log::trace!(
        "Classified headers: {} found, {} missing, {} cookies",
        classification.found.len(),
        classification.missing.len(),
        classification.cookies.len()
    );

    classification
}
