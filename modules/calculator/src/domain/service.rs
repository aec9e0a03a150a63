use super::error::DomainError;

/// Outcome of the modulus operation.
///
/// A zero divisor is deliberately not a domain error: the REST layer renders
/// `Undefined` as the literal string `"NaN"` inside a successful response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remainder {
    Value(f64),
    Undefined,
}

/// Stateless arithmetic service, one method per exposed operation.
///
/// Operands arrive unvalidated; NaN inputs flow through every operation and
/// come out as NaN results where the arithmetic dictates.
#[derive(Debug, Default, Clone, Copy)]
pub struct Service;

impl Service {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division with an explicit zero-divisor check, so `6 / 0` is a domain
    /// error rather than infinity.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        if b == 0.0 {
            return Err(DomainError::DivideByZero);
        }
        Ok(a / b)
    }

    /// Truncating remainder; a zero divisor yields [`Remainder::Undefined`].
    #[must_use]
    pub fn modulus(&self, a: f64, b: f64) -> Remainder {
        if b == 0.0 {
            return Remainder::Undefined;
        }
        Remainder::Value(a % b)
    }

    #[must_use]
    pub fn power(&self, a: f64, b: f64) -> f64 {
        a.powf(b)
    }

    pub fn sqrt(&self, a: f64) -> Result<f64, DomainError> {
        if a < 0.0 {
            return Err(DomainError::NegativeSqrt);
        }
        Ok(a.sqrt())
    }

    #[must_use]
    pub fn absolute(&self, a: f64) -> f64 {
        a.abs()
    }

    /// Iterative factorial over the float operand.
    ///
    /// The loop multiplies `1, 2, ...` while the counter stays `<= a`, so a
    /// non-integer operand like `3.5` produces `6` and NaN produces `1` (the
    /// loop never runs). Non-integer input is an unspecified corner of the
    /// contract and is reproduced as-is rather than rejected.
    pub fn factorial(&self, a: f64) -> Result<f64, DomainError> {
        if a < 0.0 {
            return Err(DomainError::NegativeFactorial);
        }
        if a == 0.0 {
            return Ok(1.0);
        }
        let mut result = 1.0;
        let mut i = 1.0;
        while i <= a {
            result *= i;
            i += 1.0;
        }
        Ok(result)
    }

    #[must_use]
    pub fn square(&self, a: f64) -> f64 {
        a * a
    }
}
