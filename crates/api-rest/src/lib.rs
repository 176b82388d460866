//! # API REST
//!
//! REST API implementation for medtrack.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, the `x-principal`
//!   caller identity header)
//!
//! Uses `medtrack-types` for the wire shapes and `medtrack-core` for all
//! domain behaviour.

#![warn(rust_2018_idioms)]

pub mod routes;

pub use routes::{router, ApiDoc, AppState, PRINCIPAL_HEADER};
