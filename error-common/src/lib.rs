//! Common error handling utilities for Pin People
//!
//! Standardized error types used across the Pin People crates. Handlers in
//! the HTTP layer have their own `ApiError`; this crate covers everything
//! outside a request context (startup, configuration, serving).

pub mod types;

pub use types::*;
