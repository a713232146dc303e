//! The request handler hyper dispatches to for QRlyAPI.

use std::{convert::Infallible, net::SocketAddr};

use http::{Method, StatusCode};
use hyper::{Body, Request, Response};
use snafu::ResultExt;
use tracing::info;

use super::{
    error::{BodyReadSnafu, QrError, ResponseBuildSnafu},
    generate, png, render, spec, trim,
};

pub async fn handle(
    _remote_addr: SocketAddr,
    req: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();

    let response = match handle_inner(req).await {
        Ok(response) => response,
        Err(error) => error.into_response(),
    };

    info!(
        message = "Request handled.",
        method = %method,
        status = response.status().as_u16(),
    );

    Ok(response)
}

async fn handle_inner(req: Request<Body>) -> Result<Response<Body>, QrError> {
    if req.method() != Method::POST {
        return Err(QrError::UnsupportedMethod {
            method: req.method().to_string(),
        });
    }

    let body = hyper::body::to_bytes(req.into_body())
        .await
        .context(BodyReadSnafu)?;

    let qr_spec = spec::parse(&body)?;

    let matrix = generate::generate(&qr_spec.payload, qr_spec.recovery_level)?;
    let raster = render::render(
        &matrix,
        qr_spec.size,
        qr_spec.foreground_colour,
        qr_spec.background_colour,
    );
    let raster = trim::trim(raster, qr_spec.trim_width);
    let png_bytes = png::encode(&raster)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "image/png")
        .body(Body::from(png_bytes))
        .context(ResponseBuildSnafu)
}
