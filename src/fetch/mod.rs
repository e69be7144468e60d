//! Outbound fetch of the checked page.
//!
//! A check issues exactly one GET request (redirects are followed by the
//! client) and keeps the status, final URL and complete header map. The
//! response body is never read.

mod request;
mod response;

pub use request::fetch_target;
pub use response::FetchedResponse;
