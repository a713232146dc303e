//! The error enum for the QR generation pipeline: JSON/validation failures,
//! encoder failures, and response-build failures. Every variant renders as
//! the same 400 `text/plain` shape on the wire (see
//! [`echo_common::HttpError`]); this type exists to carry specific,
//! per-failure context up to that single conversion point.

use echo_common::HttpError;
use hyper::{Body, Response};
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum QrError {
    #[snafu(display("unsupported method: {method}"))]
    UnsupportedMethod { method: String },

    #[snafu(display("failed to read request body: {source}"))]
    BodyRead { source: hyper::Error },

    #[snafu(display("invalid JSON body: {source}"))]
    InvalidJson { source: serde_json::Error },

    #[snafu(display("payload is required and must not be empty"))]
    MissingPayload,

    #[snafu(display("payload exceeds {max} bytes"))]
    PayloadTooLarge { max: usize },

    #[snafu(display("unknown recovery_level: {value}"))]
    UnknownRecoveryLevel { value: String },

    #[snafu(display("size must be > 0, got {size}"))]
    InvalidSize { size: i64 },

    #[snafu(display("size must be <= {max}, got {size}"))]
    SizeOutOfRange { size: i64, max: u32 },

    #[snafu(display("{field}.{channel} is required"))]
    MissingColourChannel { field: String, channel: String },

    #[snafu(display("{field}.{channel} must be in [0,255], got {value}"))]
    ColourChannelOutOfRange {
        field: String,
        channel: String,
        value: i64,
    },

    #[snafu(display("trim_width must be >= 0, got {width}"))]
    NegativeTrimWidth { width: i64 },

    #[snafu(display("payload could not be encoded: {source}"))]
    Encode { source: qrcode::types::QrError },

    #[snafu(display("failed to encode PNG: {source}"))]
    PngEncode { source: image::ImageError },

    #[snafu(display("failed to build response: {source}"))]
    ResponseBuild { source: http::Error },
}

impl QrError {
    /// Renders this error into the single 400 plain-text shape both
    /// services put on the wire.
    pub fn into_response(self) -> Response<Body> {
        HttpError::bad_request(self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_400_plain_text() {
        let resp = QrError::MissingPayload.into_response();
        assert_eq!(resp.status(), hyper::StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
