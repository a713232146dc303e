//! Ties the parser, delay scheduler, and header introspector together into
//! the request handler hyper dispatches to.

use std::{convert::Infallible, net::SocketAddr, sync::OnceLock, time::Instant};

use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::Bytes;
use echo_common::{now_iso8601, format_duration, CorrelationIdGenerator};
use http::{
    header::{HeaderName, HOST, USER_AGENT},
    HeaderValue, StatusCode,
};
use hyper::{Body, Request, Response};
use snafu::ResultExt;
use tracing::info;

use super::{
    capture::Captured,
    delay,
    error::{BodyReadSnafu, ResponderError, ResponseBuildSnafu},
    headers,
    params::{self, ParamSet},
    record::RequestRecord,
};

fn correlation_ids() -> &'static CorrelationIdGenerator {
    static IDS: OnceLock<CorrelationIdGenerator> = OnceLock::new();
    IDS.get_or_init(CorrelationIdGenerator::new)
}

pub async fn handle(
    remote_addr: SocketAddr,
    req: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let (response, responderapi_id) = match handle_inner(remote_addr, req, start).await {
        Ok((response, id)) => (response, id),
        Err(error) => (error.into_response(), None),
    };

    info!(
        message = "Request handled.",
        method = %method,
        path = %uri.path(),
        status = response.status().as_u16(),
        responderapi_id = responderapi_id.as_deref().unwrap_or(""),
        elapsed = %format_duration(start.elapsed()),
    );

    Ok(response)
}

async fn handle_inner(
    remote_addr: SocketAddr,
    req: Request<Body>,
    start: Instant,
) -> Result<(Response<Body>, Option<String>), ResponderError> {
    let captured = Captured::from_request(remote_addr, req)
        .await
        .context(BodyReadSnafu)?;

    let params = params::parse(captured.raw_query())?;

    let found_headers = params
        .expected_headers
        .as_ref()
        .map(|names| headers::find(&captured.headers, names));

    delay::apply(&params).await;

    let (body, is_default_body, responderapi_id) =
        resolve_body(&params, &captured, found_headers.clone(), start);

    let no_headers = params.no_headers.unwrap_or(false);
    let mut response_headers = Vec::new();
    if !no_headers {
        if let Some(directives) = &params.headers {
            for directive in directives {
                response_headers.push(parse_header_directive(directive)?);
            }
        }
    }

    if is_default_body && !has_header(&response_headers, &http::header::CONTENT_TYPE) {
        response_headers.push((
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));
    }

    let status_code = params.status_code.unwrap_or(200);
    let status = StatusCode::from_u16(status_code)
        .map_err(|_| ResponderError::InvalidStatusCode { status_code })?;

    let mut builder = Response::builder().status(status);
    for (name, value) in response_headers {
        builder = builder.header(name, value);
    }

    let response = builder
        .body(Body::from(body))
        .context(ResponseBuildSnafu)?;

    Ok((response, responderapi_id))
}

fn has_header(headers: &[(HeaderName, HeaderValue)], name: &HeaderName) -> bool {
    headers.iter().any(|(n, _)| n == name)
}

fn parse_header_directive(directive: &str) -> Result<(HeaderName, HeaderValue), ResponderError> {
    let (name, value) = directive.split_once(':').ok_or_else(|| {
        ResponderError::MalformedHeaderDirective {
            directive: directive.to_string(),
        }
    })?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| {
        ResponderError::InvalidHeaderName {
            name: name.to_string(),
        }
    })?;
    let value = HeaderValue::from_str(value.trim()).map_err(|_| ResponderError::InvalidHeaderValue {
        value: value.to_string(),
    })?;
    Ok((name, value))
}

/// Returns the response body bytes, whether they came from the default JSON
/// record (as opposed to a client-supplied `body` or an explicit `no_body`),
/// and the correlation ID assigned to the record, if one was generated — so
/// both the `Content-Type` default and the request-handling log line can key
/// off them.
fn resolve_body(
    params: &ParamSet,
    captured: &Captured,
    found_headers: Option<Vec<String>>,
    start: Instant,
) -> (Bytes, bool, Option<String>) {
    if let Some(b64) = &params.body {
        let bytes = BASE64_STANDARD
            .decode(b64.as_bytes())
            .expect("validated as base64 during parsing");
        return (Bytes::from(bytes), false, None);
    }

    if params.no_body.unwrap_or(false) {
        return (Bytes::new(), false, None);
    }

    let responderapi_id = correlation_ids().next();

    let record = RequestRecord {
        protocol: captured.protocol().to_string(),
        method: captured.method.to_string(),
        user_agent: captured.header_str(USER_AGENT),
        client_address: captured.client_address(),
        host: captured.header_str(HOST),
        url_path: captured.url_path(),
        content_type: captured.header_str(http::header::CONTENT_TYPE),
        content_length: captured.body.len(),
        request_body: BASE64_STANDARD.encode(&captured.body),
        found_headers,
        params: params.clone(),
        responderapi_id: responderapi_id.clone(),
        called_at: now_iso8601(),
        execution_time: format_duration(start.elapsed()),
    };

    let bytes = serde_json::to_vec(&record).expect("RequestRecord always serializes");
    (Bytes::from(bytes), true, Some(responderapi_id))
}
