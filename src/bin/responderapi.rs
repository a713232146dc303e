//! Entry point for the ResponderAPI binary: a programmable HTTP echo server.

use std::{net::SocketAddr, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use echo_services::{responder, server};

/// Programmable HTTP echo/mock server.
#[derive(Debug, Parser)]
#[command(name = "responderapi", version, about)]
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

    match server::run("responderapi", opts.listen_addr, responder::handle).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(message = "Failed to start server.", %error);
            ExitCode::FAILURE
        }
    }
}
