use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Ingest error: {0}")]
    Ingest(#[from] ingest::IngestError),

    #[error("Parse error: {0}")]
    Parse(#[from] canonical::ParseError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] docugen::PipelineError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ServerError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ServerError::MissingInput(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Ingest(err) => ingest_status(err),
            ServerError::Pipeline(docugen::PipelineError::Ingest(err)) => ingest_status(err),
            ServerError::Parse(_) | ServerError::Pipeline(docugen::PipelineError::Parse(_)) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Export(_) => StatusCode::BAD_GATEWAY,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::Authentication(_) => "AUTH_FAILED",
            ServerError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ServerError::MissingInput(_) => "MISSING_INPUT",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Ingest(err) => ingest_code(err),
            ServerError::Pipeline(docugen::PipelineError::Ingest(err)) => ingest_code(err),
            ServerError::Parse(_) | ServerError::Pipeline(docugen::PipelineError::Parse(_)) => {
                "PARSE_ERROR"
            }
            ServerError::Export(export::ExportError::Timeout(_)) => "EXPORT_TIMEOUT",
            ServerError::Export(_) => "EXPORT_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

// The ingest crate owns the status mapping; keep it the single source.
fn ingest_status(err: &ingest::IngestError) -> StatusCode {
    StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST)
}

fn ingest_code(err: &ingest::IngestError) -> &'static str {
    match err {
        ingest::IngestError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
        ingest::IngestError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
        _ => "INGEST_ERROR",
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

// Display is automatically derived by thiserror::Error
