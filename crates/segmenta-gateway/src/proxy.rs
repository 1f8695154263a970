//! Verbatim relay to the upstream analytics backend.
//!
//! One [`UpstreamClient`] is built at startup from the configured base URL
//! and shared by every route. Each forwarded request is an HTTP GET with
//! `accept: application/json`; the upstream's status code, headers, and body
//! bytes come back unmodified. No retries, no timeouts beyond the platform
//! socket defaults, no status translation.

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Uri};
use axum::response::Response;
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::error::GatewayError;

/// Headers that describe the hop rather than the payload. The body is fully
/// buffered before relaying, so copying these through would misdescribe the
/// relayed response.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// HTTP client bound to the single configured upstream base URL.
pub struct UpstreamClient {
    base: String,
    http: Client<HttpConnector, Empty<Bytes>>,
}

impl UpstreamClient {
    /// Validate the base URL once; every later `forward` only appends a
    /// known suffix and the caller's query string to it.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let base = base_url.into().trim_end_matches('/').to_string();
        let _: Uri = base.parse()?;
        Ok(Self {
            base,
            http: Client::builder(TokioExecutor::new()).build_http(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// GET `<base><suffix>[?query]` and relay the upstream response.
    ///
    /// Upstream 4xx/5xx pass straight through; only a transport-level
    /// failure (refused connection, DNS, torn body) returns an error.
    pub async fn forward(
        &self,
        suffix: &str,
        query: Option<&str>,
    ) -> Result<Response, GatewayError> {
        let target = match query {
            Some(q) => format!("{}{}?{}", self.base, suffix, q),
            None => format!("{}{}", self.base, suffix),
        };
        let uri: Uri = target.parse()?;
        tracing::debug!(%uri, "proxy: forwarding");

        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .body(Empty::<Bytes>::new())?;

        let response = self.http.request(request).await?;
        let (parts, body) = response.into_parts();
        let bytes = body
            .collect()
            .await
            .map_err(GatewayError::UpstreamBody)?
            .to_bytes();
        tracing::debug!(status = %parts.status, len = bytes.len(), "proxy: upstream responded");

        let mut relayed = Response::builder().status(parts.status);
        for (name, value) in &parts.headers {
            if !HOP_BY_HOP.contains(&name.as_str()) {
                relayed = relayed.header(name, value);
            }
        }
        Ok(relayed.body(Body::from(bytes))?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
