//! REST DTOs for the calculator module.
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::service::Remainder;

fn absent_operand() -> f64 {
    f64::NAN
}

/// Operands for binary operations.
///
/// An absent field deserializes to NaN and flows through the arithmetic
/// unvalidated; the API performs no presence checks.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct BinaryOperands {
    /// First operand
    #[serde(default = "absent_operand")]
    pub a: f64,
    /// Second operand
    #[serde(default = "absent_operand")]
    pub b: f64,
}

/// Operand for unary operations (sqrt, absolute, factorial, square).
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct UnaryOperand {
    /// The operand
    #[serde(default = "absent_operand")]
    pub a: f64,
}

/// A computed value on the wire.
///
/// Numeric results serialize as JSON numbers (non-finite values become
/// `null`, as in `JSON.stringify`). Modulus with a zero divisor serializes as
/// the literal string `"NaN"` inside a 200 response; clients check for the
/// sentinel rather than an error field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CalcValue {
    Number(f64),
    Sentinel(String),
}

impl From<f64> for CalcValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Remainder> for CalcValue {
    fn from(r: Remainder) -> Self {
        match r {
            Remainder::Value(v) => Self::Number(v),
            Remainder::Undefined => Self::Sentinel("NaN".to_owned()),
        }
    }
}

/// Successful operation response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationResponse {
    /// The computed result
    pub result: CalcValue,
}

impl OperationResponse {
    pub fn new(result: impl Into<CalcValue>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// Error payload for domain validation failures (HTTP 400).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Fixed human-readable message
    pub error: String,
}
