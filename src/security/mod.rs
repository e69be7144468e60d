//! Security header classification.
//!
//! This module compares a response's headers against the compiled-in
//! knowledge base ([`HEADER_SPECS`](crate::config::HEADER_SPECS)) and splits
//! the known headers into found and missing, with their static metadata.
//! No grading is performed; each header stands alone.

mod analysis;
mod types;

pub use analysis::{classify_headers, classify_pairs, Classification};
pub use types::{FoundHeader, HeaderSpec, MissingHeader, Severity};
