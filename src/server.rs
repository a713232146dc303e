//! Minimal hyper bind/serve loop shared by both binaries.
//!
//! Neither service needs routing, middleware stacks, or TLS, so there's no
//! reason to reach for a framework: a `make_service_fn` per connection wrapping
//! a `service_fn` per request is the whole of it.

use std::{convert::Infallible, future::Future, net::SocketAddr};

use hyper::{
    server::conn::AddrStream,
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server,
};
use tracing::{error, info};

/// Binds `addr` and serves every connection to `handler` until ctrl-c arrives.
///
/// `handler` receives the connection's remote address alongside each request;
/// ResponderAPI needs it for `client_address`, QRlyAPI ignores it.
pub async fn run<H, F>(service_name: &str, addr: SocketAddr, handler: H) -> hyper::Result<()>
where
    H: Fn(SocketAddr, Request<Body>) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Result<Response<Body>, Infallible>> + Send + 'static,
{
    let make_service = make_service_fn(move |conn: &AddrStream| {
        let handler = handler.clone();
        let remote_addr = conn.remote_addr();
        async move { Ok::<_, Infallible>(service_fn(move |req| handler(remote_addr, req))) }
    });

    let server = Server::bind(&addr).serve(make_service);
    info!(message = "Listening.", service = service_name, %addr);

    let graceful = server.with_graceful_shutdown(shutdown_signal());

    if let Err(error) = graceful.await {
        error!(message = "Server error.", service = service_name, %error);
        return Err(error);
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(message = "Failed to install ctrl-c handler.", %error);
    }
}
