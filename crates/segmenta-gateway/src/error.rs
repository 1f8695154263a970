//! Gateway error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// A failure on the gateway's own hop to the upstream backend.
///
/// Upstream HTTP error statuses are NOT represented here — the proxy relays
/// 4xx/5xx responses verbatim. These variants cover the cases where there is
/// no upstream response to relay at all.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid upstream target: {0}")]
    InvalidTarget(#[from] axum::http::uri::InvalidUri),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    #[error("failed reading upstream body: {0}")]
    UpstreamBody(#[source] hyper::Error),

    #[error("failed to build relayed response: {0}")]
    Relay(#[from] axum::http::Error),
}

impl IntoResponse for GatewayError {
    /// Transport failures surface to the dashboard as `502 Bad Gateway`
    /// carrying the raw error text; the consuming UI renders its generic
    /// error banner from it.
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "gateway: upstream hop failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}
