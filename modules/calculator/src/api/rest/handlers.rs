//! REST handlers for the calculator module.
//!
//! Binary operations read `{ a, b }`, unary operations read `{ a }`. Fallible
//! operations delegate to the domain service and map validation failures to
//! HTTP 400 via [`ApiError`].

use std::sync::Arc;

use axum::{Extension, Json};

use crate::domain::Service;

use super::dto::{BinaryOperands, OperationResponse, UnaryOperand};
use super::error::ApiError;

#[utoipa::path(
    post,
    path = "/api/add",
    tag = "Calculator",
    request_body = BinaryOperands,
    responses((status = 200, description = "Sum of a and b", body = OperationResponse))
)]
pub async fn add(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<OperationResponse> {
    Json(OperationResponse::new(service.add(req.a, req.b)))
}

#[utoipa::path(
    post,
    path = "/api/subtract",
    tag = "Calculator",
    request_body = BinaryOperands,
    responses((status = 200, description = "Difference of a and b", body = OperationResponse))
)]
pub async fn subtract(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<OperationResponse> {
    Json(OperationResponse::new(service.subtract(req.a, req.b)))
}

#[utoipa::path(
    post,
    path = "/api/multiply",
    tag = "Calculator",
    request_body = BinaryOperands,
    responses((status = 200, description = "Product of a and b", body = OperationResponse))
)]
pub async fn multiply(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<OperationResponse> {
    Json(OperationResponse::new(service.multiply(req.a, req.b)))
}

#[utoipa::path(
    post,
    path = "/api/divide",
    tag = "Calculator",
    request_body = BinaryOperands,
    responses(
        (status = 200, description = "Quotient of a and b", body = OperationResponse),
        (status = 400, description = "Divide by zero", body = super::dto::ErrorResponse)
    )
)]
pub async fn divide(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Result<Json<OperationResponse>, ApiError> {
    let quotient = service.divide(req.a, req.b)?;
    Ok(Json(OperationResponse::new(quotient)))
}

/// Modulus never fails: a zero divisor produces the `"NaN"` sentinel inside a
/// 200 response.
#[utoipa::path(
    post,
    path = "/api/mod",
    tag = "Calculator",
    request_body = BinaryOperands,
    responses((status = 200, description = "Truncating remainder, or the string \"NaN\" for a zero divisor", body = OperationResponse))
)]
pub async fn modulus(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<OperationResponse> {
    Json(OperationResponse::new(service.modulus(req.a, req.b)))
}

#[utoipa::path(
    post,
    path = "/api/power",
    tag = "Calculator",
    request_body = BinaryOperands,
    responses((status = 200, description = "a raised to the power b", body = OperationResponse))
)]
pub async fn power(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<OperationResponse> {
    Json(OperationResponse::new(service.power(req.a, req.b)))
}

#[utoipa::path(
    post,
    path = "/api/sqrt",
    tag = "Calculator",
    request_body = UnaryOperand,
    responses(
        (status = 200, description = "Non-negative square root of a", body = OperationResponse),
        (status = 400, description = "Negative operand", body = super::dto::ErrorResponse)
    )
)]
pub async fn sqrt(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<UnaryOperand>,
) -> Result<Json<OperationResponse>, ApiError> {
    let root = service.sqrt(req.a)?;
    Ok(Json(OperationResponse::new(root)))
}

#[utoipa::path(
    post,
    path = "/api/absolute",
    tag = "Calculator",
    request_body = UnaryOperand,
    responses((status = 200, description = "Absolute value of a", body = OperationResponse))
)]
pub async fn absolute(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<UnaryOperand>,
) -> Json<OperationResponse> {
    Json(OperationResponse::new(service.absolute(req.a)))
}

#[utoipa::path(
    post,
    path = "/api/factorial",
    tag = "Calculator",
    request_body = UnaryOperand,
    responses(
        (status = 200, description = "Factorial of a", body = OperationResponse),
        (status = 400, description = "Negative operand", body = super::dto::ErrorResponse)
    )
)]
pub async fn factorial(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<UnaryOperand>,
) -> Result<Json<OperationResponse>, ApiError> {
    let product = service.factorial(req.a)?;
    Ok(Json(OperationResponse::new(product)))
}

#[utoipa::path(
    post,
    path = "/api/square",
    tag = "Calculator",
    request_body = UnaryOperand,
    responses((status = 200, description = "a multiplied by itself", body = OperationResponse))
)]
pub async fn square(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<UnaryOperand>,
) -> Json<OperationResponse> {
    Json(OperationResponse::new(service.square(req.a)))
}
