use std::sync::Arc;

use axum::{Extension, Router, routing::post};
use utoipa::OpenApi;

use crate::domain::Service;

use super::handlers;

/// OpenAPI document for the calculator endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webcalc API",
        description = "Stateless arithmetic operations over JSON"
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::modulus,
        handlers::power,
        handlers::sqrt,
        handlers::absolute,
        handlers::factorial,
        handlers::square,
    ),
    tags((name = "Calculator", description = "Arithmetic operations"))
)]
pub struct ApiDoc;

/// Build the `/api` router with the service injected as an extension.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/api/add", post(handlers::add))
        .route("/api/subtract", post(handlers::subtract))
        .route("/api/multiply", post(handlers::multiply))
        .route("/api/divide", post(handlers::divide))
        .route("/api/mod", post(handlers::modulus))
        .route("/api/power", post(handlers::power))
        .route("/api/sqrt", post(handlers::sqrt))
        .route("/api/absolute", post(handlers::absolute))
        .route("/api/factorial", post(handlers::factorial))
        .route("/api/square", post(handlers::square))
        .layer(Extension(service))
}
