//! HTTP middleware for request processing.
//!
//! Provides write-request validation and request tracing.

pub mod tracing;
pub mod validation;

pub use validation::ValidTitle;
