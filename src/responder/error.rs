//! The error enum for everything that can go wrong synthesizing a response:
//! malformed DSL input, bad base64, or a response the handler failed to
//! build. Every variant renders as the same 400 `text/plain` shape on the
//! wire (see [`echo_common::HttpError`]); this type exists to carry specific,
//! per-failure context up to that single conversion point.

use echo_common::HttpError;
use hyper::{Body, Response};
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ResponderError {
    #[snafu(display("failed to read request body: {source}"))]
    BodyRead { source: hyper::Error },

    #[snafu(display("missing value for '{key}'"))]
    MissingValue { key: String },

    #[snafu(display("invalid value for '{key}': {value}"))]
    InvalidInteger { key: String, value: String },

    #[snafu(display("random_delay requires 'min,max'"))]
    MalformedRandomDelay,

    #[snafu(display("random_delay.min must not exceed random_delay.max"))]
    InvertedRandomDelay,

    #[snafu(display("invalid base64 for '{key}'"))]
    InvalidBase64 { key: String },

    #[snafu(display("non-utf8 value in '{key}'"))]
    NonUtf8Value { key: String },

    #[snafu(display("malformed response header: {directive}"))]
    MalformedHeaderDirective { directive: String },

    #[snafu(display("invalid header name: {name}"))]
    InvalidHeaderName { name: String },

    #[snafu(display("invalid header value: {value}"))]
    InvalidHeaderValue { value: String },

    #[snafu(display("invalid status_code: {status_code}"))]
    InvalidStatusCode { status_code: u16 },

    #[snafu(display("failed to build response: {source}"))]
    ResponseBuild { source: http::Error },
}

impl ResponderError {
    /// Renders this error into the single 400 plain-text shape both
    /// services put on the wire.
    pub fn into_response(self) -> Response<Body> {
        HttpError::bad_request(self.to_string()).into_response()
    }
}
