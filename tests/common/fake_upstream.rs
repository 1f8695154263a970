//! Fake analytics backend for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Tests register canned responses per upstream path and point
//! the gateway's `UpstreamClient` at `base_url()`. Every request the server
//! receives is recorded with its full path-and-query, so harnesses can
//! assert exactly what the proxy forwarded.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_upstream::FakeUpstream;
//!
//! let upstream = FakeUpstream::start().await.unwrap();
//! upstream.respond("/api/kpis", 200, r#"{"totalClientes":100}"#).await;
//!
//! // Point the gateway at upstream.base_url(), drive it, then:
//! assert_eq!(upstream.requests().await, vec!["/api/kpis".to_string()]);
//! # });
//! ```

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// One canned response, returned for every request to its path.
#[derive(Clone)]
struct CannedResponse {
    status: u16,
    body: String,
    extra_headers: Vec<(String, String)>,
}

/// State shared between the router and test code.
#[derive(Default)]
struct UpstreamState {
    /// Path (without query) → canned response.
    responses: HashMap<String, CannedResponse>,
    /// Full path-and-query of every request, in arrival order.
    seen: Vec<String>,
}

/// Handle to the running fake backend.
pub struct FakeUpstream {
    addr: SocketAddr,
    state: Arc<Mutex<UpstreamState>>,
}

impl FakeUpstream {
    /// Start the fake backend on a random port. Returns once the server is
    /// listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(UpstreamState::default()));

        let app = Router::new().fallback(handle).with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the backend (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Register a canned `application/json` response for a path.
    pub async fn respond(&self, path: &str, status: u16, body: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.responses.insert(
            path.to_string(),
            CannedResponse { status, body: body.into(), extra_headers: Vec::new() },
        );
    }

    /// Like [`respond`](Self::respond), with one extra response header.
    pub async fn respond_with_header(
        &self,
        path: &str,
        status: u16,
        body: impl Into<String>,
        header_name: &str,
        header_value: &str,
    ) {
        let mut state = self.state.lock().await;
        state.responses.insert(
            path.to_string(),
            CannedResponse {
                status,
                body: body.into(),
                extra_headers: vec![(header_name.to_string(), header_value.to_string())],
            },
        );
    }

    /// Snapshot of every request line seen so far (path + query, in order).
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.seen.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handler
// ---------------------------------------------------------------------------

async fn handle(State(state): State<Arc<Mutex<UpstreamState>>>, req: Request) -> Response {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let path = req.uri().path().to_string();

    let canned = {
        let mut state = state.lock().await;
        state.seen.push(path_and_query);
        state.responses.get(&path).cloned()
    };

    match canned {
        Some(canned) => {
            let mut response = Response::builder()
                .status(StatusCode::from_u16(canned.status).unwrap())
                .header(header::CONTENT_TYPE, "application/json");
            for (name, value) in &canned.extra_headers {
                response = response.header(name.as_str(), value.as_str());
            }
            response.body(Body::from(canned.body)).unwrap()
        }
        None => (StatusCode::NOT_FOUND, String::new()).into_response(),
    }
}
