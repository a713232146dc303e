//! Matches the client-declared `expected_headers` names against the headers
//! actually present on the request.
//!
//! `http::HeaderMap` normalizes every header name to lowercase as it parses
//! the wire bytes, so request-side casing is unrecoverable through the public
//! API regardless of what the client sent. We look the name up
//! case-insensitively (headers are case-insensitive per RFC 7230 anyway) and
//! echo it back using the casing the client asked about, not whatever
//! casing happened to arrive on the wire.

use http::HeaderMap;

pub fn find(headers: &HeaderMap, expected_names: &[String]) -> Vec<String> {
    expected_names
        .iter()
        .filter_map(|name| {
            headers
                .get(name.as_str())
                .and_then(|value| value.to_str().ok())
                .map(|value| format!("{name}: {value}"))
        })
        .collect()
}
