//! HTTP surface for the feed.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::HeaderValue;
use axum::routing::any;
use axum::{Json, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::FeedConfig;
use crate::core::blogger::BloggerSource;
use crate::core::feed::FeedService;
use crate::core::{FeedResponse, PostSource};

/// Builds the router serving the feed at `route`.
///
/// Every method is answered the same way; only GET is advertised.
pub fn router<P: PostSource + 'static>(service: Arc<FeedService<P>>, route: &str) -> Router {
    Router::new()
        .route(route, any(list_blogs::<P>))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn list_blogs<P: PostSource + 'static>(
    State(service): State<Arc<FeedService<P>>>,
) -> Json<FeedResponse> {
    Json(service.load().await)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: FeedConfig) -> Result<()> {
    let bind = config.server.bind.clone();
    let route = config.feed.route.clone();

    if !config.has_credentials() {
        info!("Blogger credentials absent; every request will be answered with seed data");
    }

    let source = BloggerSource::new(config).context("Failed to build Blogger HTTP client")?;
    let app = router(Arc::new(FeedService::new(source)), &route);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;

    info!(addr = %bind, route = %route, "Blog feed listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Blog feed stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
