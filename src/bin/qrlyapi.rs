//! Entry point for the QRlyAPI binary: an HTTP endpoint that renders QR codes.

use std::{net::SocketAddr, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use echo_services::{qr, server};

/// HTTP endpoint that renders a JSON QR code specification to a PNG.
#[derive(Debug, Parser)]
#[command(name = "qrlyapi", version, about)]
struct Opts {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen_addr: SocketAddr,
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let opts = Opts::parse();

    match server::run("qrlyapi", opts.listen_addr, qr::handle).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(message = "Failed to start server.", %error);
            ExitCode::FAILURE
        }
    }
}
