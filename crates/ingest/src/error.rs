//! Error surface of the ingest stage.
//!
//! All errors are typed, cloneable, and comparable so the HTTP layer can map
//! them to precise status codes and tests can match on them. Detection
//! failures are terminal: no parser runs after an ingest rejection.

use thiserror::Error;

/// Errors produced while validating an upload and detecting its format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// The upload carried no filename, so there is no extension to detect on.
    #[error("upload has no filename")]
    MissingFilename,

    /// The filename extension is not one of `.json`, `.yaml`, `.yml`, `.md`.
    /// This is a hard rejection made before any parser is invoked.
    #[error("unsupported file type: {0:?}")]
    UnsupportedFormat(String),

    /// The upload body is empty.
    #[error("upload payload is empty")]
    EmptyPayload,

    /// The upload body is not valid UTF-8. Every supported format is text.
    #[error("upload is not valid utf-8: {0}")]
    InvalidUtf8(String),

    /// The upload body exceeds the configured size limit.
    #[error("payload exceeds size limit: {0}")]
    PayloadTooLarge(String),
}

impl IngestError {
    /// HTTP status code for this error. The server layer maps ingest errors
    /// through this method so the two never diverge.
    pub fn http_status_code(&self) -> u16 {
        match self {
            IngestError::PayloadTooLarge(_) => 413,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(IngestError::MissingFilename.http_status_code(), 400);
        assert_eq!(
            IngestError::UnsupportedFormat("csv".into()).http_status_code(),
            400
        );
        assert_eq!(IngestError::EmptyPayload.http_status_code(), 400);
        assert_eq!(
            IngestError::InvalidUtf8("truncated".into()).http_status_code(),
            400
        );
        assert_eq!(
            IngestError::PayloadTooLarge("oversize".into()).http_status_code(),
            413
        );
    }
}
