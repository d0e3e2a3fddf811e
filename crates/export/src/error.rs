use thiserror::Error;

/// Failure reported by a [`PdfEngine`](crate::PdfEngine) implementation.
///
/// The engine is a black box, so its failures are carried as a message
/// rather than a structured taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EngineError(pub String);

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        EngineError(err.to_string())
    }
}

/// Errors surfaced by the export adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExportError {
    /// The engine reported a failure; its message is attached verbatim.
    #[error("PDF engine failure: {0}")]
    Engine(String),

    /// The engine did not respond within the configured bound.
    #[error("PDF engine timed out after {0}s")]
    Timeout(u64),
}
