//! Calculator module: ten stateless arithmetic operations exposed over REST.
//!
//! The domain layer (`domain`) is transport-free; the REST layer (`api::rest`)
//! owns the wire DTOs, the `{ "error": ... }` payload shape, and the router.

pub mod api;
pub mod domain;

pub use domain::service::Service;
