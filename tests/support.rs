//! Shared black-box test helper: spawn a real server on an ephemeral port.

use std::{
    convert::Infallible,
    future::Future,
    net::{SocketAddr, TcpListener},
};

use hyper::{Body, Request, Response};

/// Binds an ephemeral port, spawns `handler` on it, and returns the base URL
/// once the listener is accepting connections.
pub async fn spawn<H, F>(handler: H) -> String
where
    H: Fn(SocketAddr, Request<Body>) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Result<Response<Body>, Infallible>> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has a local address");
    drop(listener);

    tokio::spawn(async move {
        let _ = echo_services::server::run("test", addr, handler).await;
    });

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    format!("http://{addr}")
}
