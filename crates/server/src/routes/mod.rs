//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the docugen
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `upload`: Documentation file upload and classification
//! - `pdf`: PDF export of previously parsed documents

pub mod health;
pub mod pdf;
pub mod upload;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Docugen Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/upload",
            "/api/v1/export",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
