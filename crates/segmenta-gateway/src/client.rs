//! Typed client for the gateway's dashboard surface.
//!
//! One method per endpoint, mirroring what the chart components consume.
//! The three stable collaborator shapes deserialize into the types from
//! `segmenta_core::types`; the chart-feed endpoints whose payloads vary by
//! upstream data availability come back as raw [`serde_json::Value`]s.

use axum::http::{header, HeaderValue, Method, Request, StatusCode, Uri};
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use segmenta_core::filters::FilterConfig;
use segmenta_core::types::{KpiSummary, SalesTrendPoint, SegmentSummaryRow};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid request target: {0}")]
    InvalidTarget(#[from] axum::http::uri::InvalidUri),

    #[error("request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("failed reading response body: {0}")]
    Body(#[source] hyper::Error),

    /// Non-2xx response; carries the status and the body text so the UI can
    /// show the upstream's own message.
    #[error("[{status}] {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to build request: {0}")]
    Request(#[from] axum::http::Error),
}

// ---------------------------------------------------------------------------
// Segments query parameters
// ---------------------------------------------------------------------------

/// Query parameters the upstream segments endpoint understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentsQuery {
    pub segmento: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SegmentsQuery {
    /// Derive the upstream parameters from a committed filter
    /// configuration. Only the segment selection translates to a server-side
    /// parameter; the remaining filters narrow data the charts already hold.
    pub fn from_filters(committed: &FilterConfig) -> Self {
        Self {
            segmento: committed.segment.clone(),
            ..Self::default()
        }
    }

    /// Render as `?k=v&…` with a leading `?`, or an empty string when no
    /// parameter is set. Values are the ASCII tokens the select controls
    /// submit; no escaping is applied.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(segmento) = &self.segmento {
            parts.push(format!("segmento={segmento}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardClient
// ---------------------------------------------------------------------------

/// HTTP client for the gateway surface.
pub struct DashboardClient {
    base: String,
    http: Client<HttpConnector, Empty<Bytes>>,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base: base_url.into().trim_end_matches('/').to_string(),
            http: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ClientError> {
        let uri: Uri = format!("{}{}", self.base, path_and_query).parse()?;
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .body(Empty::<Bytes>::new())?;

        let response = self.http.request(request).await?;
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(ClientError::Body)?
            .to_bytes();

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn kpis(&self) -> Result<KpiSummary, ClientError> {
        self.get_json("/api/kpis").await
    }

    pub async fn segments(&self, query: &SegmentsQuery) -> Result<Vec<Value>, ClientError> {
        self.get_json(&format!("/api/segments{}", query.to_query_string()))
            .await
    }

    pub async fn segments_summary(&self) -> Result<Vec<SegmentSummaryRow>, ClientError> {
        self.get_json("/api/segments/summary").await
    }

    pub async fn sales_trend(&self) -> Result<Vec<SalesTrendPoint>, ClientError> {
        self.get_json("/api/sales/trend").await
    }

    pub async fn funnel(&self) -> Result<Value, ClientError> {
        self.get_json("/api/funnel").await
    }

    pub async fn regions(&self) -> Result<Value, ClientError> {
        self.get_json("/api/regions").await
    }

    pub async fn performance(&self) -> Result<Value, ClientError> {
        self.get_json("/api/performance").await
    }

    pub async fn hourly(&self) -> Result<Value, ClientError> {
        self.get_json("/api/hourly").await
    }

    pub async fn predictions(&self, query: Option<&str>) -> Result<Value, ClientError> {
        match query {
            Some(q) => self.get_json(&format!("/api/predictions?{q}")).await,
            None => self.get_json("/api/predictions").await,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
