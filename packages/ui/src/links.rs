//! Links into the portal that carry query parameters.

use dioxus::router::exports::percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use portal_core::JobId;

// Unreserved characters from RFC 3986 stay as they are.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single query-string value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Path of the apply page for one posting.
pub fn apply_path(id: &JobId) -> String {
    format!("/apply?jobId={}", encode_query_value(id.as_str()))
}
