use hyper::{Body, Response, StatusCode};
use snafu::Snafu;

/// The single error shape either service ever puts on the wire: a 400 response
/// with a short, plain-text reason. Transport-level failures (client disconnects)
/// never reach this type; they're handled by dropping the connection.
#[derive(Debug, Snafu)]
#[snafu(display("{message}"))]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Renders this error as the 400 `text/plain; charset=utf-8` response required
    /// by the error taxonomy: no JSON envelope, just the reason.
    pub fn into_response(self) -> Response<Body> {
        Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(Body::from(self.message))
            .expect("static status and header values are always valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_400_plain_text() {
        let err = HttpError::bad_request("bad payload");
        assert_eq!(err.to_string(), "bad payload");

        let resp = HttpError::bad_request("bad payload").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
