//! Gateway spawn + raw HTTP helpers for the proxy harnesses.
//!
//! The gateway under test is served on a real random TCP port and exercised
//! over the wire, exactly as in production.

use axum::http::{HeaderMap, StatusCode};
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use segmenta_gateway::{routes, UpstreamClient};

/// Serve a gateway pointed at `upstream_base` on a random port; returns its
/// base URL.
pub async fn spawn_gateway(upstream_base: &str) -> String {
    let upstream = UpstreamClient::new(upstream_base).expect("valid upstream base URL");
    let app = routes::router(upstream);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    format!("http://{addr}")
}

/// A local TCP port with nothing listening on it, for unreachable-upstream
/// tests. The listener is bound then dropped, so connects are refused.
pub async fn dead_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Plain GET, returning status, headers, and raw body bytes.
pub async fn http_get(url: &str) -> (StatusCode, HeaderMap, Bytes) {
    let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build_http();
    let response = client.get(url.parse().unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}
