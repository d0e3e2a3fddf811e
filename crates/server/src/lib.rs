//! Docugen Server - HTTP REST API for documentation generation
//!
//! This crate provides an HTTP server that exposes the docugen pipeline
//! via a REST API. It supports:
//!
//! - **Upload**: Multipart file upload with format detection and parsing
//! - **Export**: PDF export of previously parsed documents
//! - **Health**: Liveness and readiness probes
//!
//! # Features
//!
//! - **Authentication**: API key-based authentication with rate limiting
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Structured error responses with error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /api/v1/upload` - Upload and classify a documentation file
//! - `POST /api/v1/export` - Export a parsed document as PDF

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
