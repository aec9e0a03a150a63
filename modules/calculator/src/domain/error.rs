use thiserror::Error;

/// Domain validation errors for arithmetic operations.
///
/// The display strings are part of the wire contract; clients match on them
/// verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("Divide by zero")]
    DivideByZero,

    #[error("Cannot compute square root of negative number")]
    NegativeSqrt,

    #[error("Cannot compute factorial of negative number")]
    NegativeFactorial,
}
