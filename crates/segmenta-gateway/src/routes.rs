//! Route table — dashboard path to upstream path, one row per endpoint.
//!
//! The upstream backend kept Portuguese path names for the segmentation
//! endpoints; the dashboard surface exposes English paths. This table is the
//! single place that translation lives.

use std::sync::Arc;

use axum::extract::RawQuery;
use axum::routing::get;
use axum::Router;

use crate::proxy::UpstreamClient;

#[derive(Debug, Clone, Copy)]
struct ProxyRoute {
    path: &'static str,
    upstream: &'static str,
}

const PROXY_ROUTES: &[ProxyRoute] = &[
    ProxyRoute { path: "/api/kpis", upstream: "/api/kpis" },
    ProxyRoute { path: "/api/segments", upstream: "/api/segmentos" },
    ProxyRoute { path: "/api/segments/summary", upstream: "/api/segmentos/summary" },
    ProxyRoute { path: "/api/sales/trend", upstream: "/api/sales/trend" },
    ProxyRoute { path: "/api/funnel", upstream: "/api/funnel" },
    ProxyRoute { path: "/api/regions", upstream: "/api/regions" },
    ProxyRoute { path: "/api/performance", upstream: "/api/performance" },
    ProxyRoute { path: "/api/hourly", upstream: "/api/hourly" },
    ProxyRoute { path: "/api/predictions", upstream: "/api/predictions" },
    ProxyRoute { path: "/api/health", upstream: "/api/health" },
    ProxyRoute { path: "/api/schema", upstream: "/api/schema" },
];

/// Build the dashboard router over a configured upstream client.
///
/// Every route is a GET that hands its raw query string to
/// [`UpstreamClient::forward`] untouched.
pub fn router(upstream: UpstreamClient) -> Router {
    let upstream = Arc::new(upstream);
    PROXY_ROUTES.iter().fold(Router::new(), |router, route| {
        let upstream = upstream.clone();
        router.route(
            route.path,
            get(move |RawQuery(query): RawQuery| {
                let upstream = upstream.clone();
                async move { upstream.forward(route.upstream, query.as_deref()).await }
            }),
        )
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
