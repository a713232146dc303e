//! Captures everything about an incoming request that the record needs,
//! before any of it is consumed or transformed.

use std::net::SocketAddr;

use bytes::Bytes;
use http::{HeaderMap, Method, Uri, Version};
use hyper::{Body, Request};

pub struct Captured {
    pub method: Method,
    pub version: Version,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub remote_addr: SocketAddr,
}

impl Captured {
    pub async fn from_request(
        remote_addr: SocketAddr,
        req: Request<Body>,
    ) -> Result<Self, hyper::Error> {
        let (parts, body) = req.into_parts();
        let body = hyper::body::to_bytes(body).await?;
        Ok(Self {
            method: parts.method,
            version: parts.version,
            uri: parts.uri,
            headers: parts.headers,
            body,
            remote_addr,
        })
    }

    /// The raw query string, with no leading `?` and no percent-decoding applied.
    pub fn raw_query(&self) -> &str {
        self.uri.query().unwrap_or("")
    }

    /// Path and query exactly as they appeared on the request line.
    pub fn url_path(&self) -> String {
        match self.uri.query() {
            Some(query) => format!("{}?{query}", self.uri.path()),
            None => self.uri.path().to_string(),
        }
    }

    pub fn protocol(&self) -> &'static str {
        match self.version {
            Version::HTTP_09 => "HTTP/0.9",
            Version::HTTP_10 => "HTTP/1.0",
            Version::HTTP_11 => "HTTP/1.1",
            Version::HTTP_2 => "HTTP/2.0",
            Version::HTTP_3 => "HTTP/3.0",
            _ => "HTTP/1.1",
        }
    }

    pub fn header_str(&self, name: http::header::HeaderName) -> String {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string()
    }

    pub fn client_address(&self) -> String {
        self.remote_addr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn url_path_includes_raw_query() {
        let req = Request::builder()
            .uri("/widgets/1?status_code=201&no_body")
            .body(Body::empty())
            .unwrap();
        let captured = Captured::from_request("127.0.0.1:9999".parse().unwrap(), req)
            .await
            .unwrap();
        assert_eq!(captured.url_path(), "/widgets/1?status_code=201&no_body");
        assert_eq!(captured.raw_query(), "status_code=201&no_body");
    }

    #[tokio::test]
    async fn url_path_without_query_has_no_question_mark() {
        let req = Request::builder()
            .uri("/widgets/1")
            .body(Body::empty())
            .unwrap();
        let captured = Captured::from_request("127.0.0.1:9999".parse().unwrap(), req)
            .await
            .unwrap();
        assert_eq!(captured.url_path(), "/widgets/1");
    }
}
