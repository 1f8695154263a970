//! segmenta-gateway — HTTP surface of the segmenta dashboard.
//!
//! A thin pass-through layer: every dashboard API route forwards to the one
//! configured upstream analytics backend and relays the response verbatim.
//! No caching, no retries, no status translation. The route table in
//! [`routes`] is the complete surface.

pub mod client;
pub mod error;
pub mod proxy;
pub mod routes;

pub use client::{ClientError, DashboardClient, SegmentsQuery};
pub use error::GatewayError;
pub use proxy::UpstreamClient;

/// Bind the gateway and serve until the process is stopped.
pub async fn run(config: segmenta_core::config::Config) -> anyhow::Result<()> {
    let upstream = UpstreamClient::new(config.upstream.base_url.clone())?;
    let app = routes::router(upstream);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!(
        bind = %config.server.bind,
        upstream = %config.upstream.base_url,
        "gateway listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
