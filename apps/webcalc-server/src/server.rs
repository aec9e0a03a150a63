//! Router assembly and the HTTP serve loop.
//!
//! The `/api` routes come from the calculator module; this file adds the
//! health endpoint, the OpenAPI document, the static client bundle fallback,
//! and the middleware stack, then binds and serves until cancelled.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use calculator::Service;
use calculator::api::rest::{self, ApiDoc};
use http::{HeaderName, HeaderValue, Request};
use tokio_util::sync::CancellationToken;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::config::AppConfig;

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Clone, Copy)]
struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

async fn health_check() -> &'static str {
    "ok"
}

/// Build the full application router.
pub fn build_router(config: &AppConfig, service: Arc<Service>) -> Router {
    let mut router = rest::router(service);

    router = router.route("/health", get(health_check));

    // Build the OpenAPI document once, serve as static JSON.
    let openapi_doc = Arc::new(ApiDoc::openapi());
    router = router.route(
        "/openapi.json",
        get(move || async move {
            (
                [(header::CACHE_CONTROL, "no-store")],
                Json(openapi_doc.as_ref()),
            )
                .into_response()
        }),
    );

    // Everything outside /api falls back to the client bundle.
    let static_dir = &config.server.static_dir;
    let assets =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));
    router = router.fallback_service(assets);

    // 5) CORS
    if config.cors.enabled {
        router = router.layer(crate::cors::build_cors_layer(&config.cors));
    }

    // 4) Body limit
    router = router.layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(config.server.body_limit_bytes));

    // 3) Timeout
    router = router.layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    // 2) Trace + request id propagation
    router = router.layer(TraceLayer::new_for_http());
    router = router.layer(PropagateRequestIdLayer::new(X_REQUEST_ID));

    // 1) SetRequestId (registered last, runs first - outermost layer)
    router = router.layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeReqId));

    router
}

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let router = build_router(&config, Arc::new(Service::new()));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", addr);

    let cancel = CancellationToken::new();
    spawn_signal_listener(&cancel);

    let shutdown = {
        let cancel = cancel.clone();
        async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

fn spawn_signal_listener(cancel: &CancellationToken) {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        cancel.cancel();
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
