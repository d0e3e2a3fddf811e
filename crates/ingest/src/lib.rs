//! Docugen ingest layer.
//!
//! This is where an uploaded API-definition document enters the pipeline. We
//! take the raw bytes plus declared filename/MIME type, validate them, and
//! decide which grammar the parsing stage should attempt.
//!
//! ## What we do here
//!
//! - **Validate the payload** - non-empty, within the size limit, valid UTF-8
//!   (every supported format is text).
//! - **Detect the format** - the filename extension picks a [`FormatHint`]:
//!   `.json`, `.yaml`/`.yml`, or `.md`. Anything else is rejected with
//!   [`IngestError::UnsupportedFormat`] before any parser runs.
//! - **Log everything** - structured events via tracing with elapsed timing.
//!
//! Content-based classification (OpenAPI vs Postman vs generic) is *not* done
//! here; that is the parser cascade's job in the canonical crate. Detection
//! only narrows the grammar family.
//!
//! ## Example
//!
//! ```
//! use ingest::{ingest, FormatHint, IngestConfig, RawUpload};
//!
//! let upload = RawUpload::from_text("petstore.yaml", "openapi: 3.0.0\n");
//! let detected = ingest(upload, &IngestConfig::default()).unwrap();
//!
//! assert_eq!(detected.hint, FormatHint::Yaml);
//! assert_eq!(detected.filename, "petstore.yaml");
//! ```

use std::time::Instant;

use tracing::{info, warn};

mod config;
mod error;
mod types;

pub use crate::config::IngestConfig;
pub use crate::error::IngestError;
pub use crate::types::{DetectedUpload, FormatHint, RawUpload};

/// Decide which grammar to attempt for an upload.
///
/// Policy is extension-based, first match wins: `.json` → JSON, `.yaml`/
/// `.yml` → YAML, `.md` → Markdown, anything else → hard rejection. The
/// declared MIME type is ignored on purpose; clients routinely send
/// `application/octet-stream` for perfectly good files.
pub fn detect(filename: &str, _declared_mime: Option<&str>) -> Result<FormatHint, IngestError> {
    if filename.trim().is_empty() {
        return Err(IngestError::MissingFilename);
    }
    let ext = types::extension_of(filename)
        .ok_or_else(|| IngestError::UnsupportedFormat(String::new()))?;
    FormatHint::from_extension(&ext).ok_or(IngestError::UnsupportedFormat(ext))
}

/// Ingest a raw upload: validates the payload, detects the format, and
/// returns a [`DetectedUpload`] ready for the parsing stage.
pub fn ingest(raw: RawUpload, cfg: &IngestConfig) -> Result<DetectedUpload, IngestError> {
    let start = Instant::now();
    let filename = raw.filename.clone();

    match ingest_inner(raw, cfg) {
        Ok(detected) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                filename = %detected.filename,
                hint = detected.hint.as_str(),
                text_len = detected.text.len(),
                elapsed_micros,
                "ingest_success"
            );
            Ok(detected)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(filename = %filename, error = %err, elapsed_micros, "ingest_failure");
            Err(err)
        }
    }
}

fn ingest_inner(raw: RawUpload, cfg: &IngestConfig) -> Result<DetectedUpload, IngestError> {
    // Detect first: an unsupported extension is rejected even when the
    // payload itself would be unreadable anyway.
    let hint = detect(&raw.filename, raw.content_type.as_deref())?;

    if raw.bytes.is_empty() {
        return Err(IngestError::EmptyPayload);
    }

    if let Some(limit) = cfg.max_payload_bytes {
        let len = raw.bytes.len();
        if len > limit {
            return Err(IngestError::PayloadTooLarge(format!(
                "upload size {len} exceeds limit of {limit}"
            )));
        }
    }

    let text =
        String::from_utf8(raw.bytes).map_err(|err| IngestError::InvalidUtf8(err.to_string()))?;

    Ok(DetectedUpload {
        filename: raw.filename,
        hint,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_supported_extensions() {
        assert_eq!(detect("api.json", None).unwrap(), FormatHint::Json);
        assert_eq!(detect("api.yaml", None).unwrap(), FormatHint::Yaml);
        assert_eq!(detect("api.yml", None).unwrap(), FormatHint::Yaml);
        assert_eq!(detect("notes.md", None).unwrap(), FormatHint::Markdown);
    }

    #[test]
    fn detect_rejects_unknown_extension_before_parsing() {
        let err = detect("data.csv", Some("text/csv")).unwrap_err();
        assert_eq!(err, IngestError::UnsupportedFormat("csv".into()));
    }

    #[test]
    fn detect_rejects_missing_extension() {
        assert!(matches!(
            detect("Makefile", None),
            Err(IngestError::UnsupportedFormat(ext)) if ext.is_empty()
        ));
    }

    #[test]
    fn detect_rejects_empty_filename() {
        assert_eq!(detect("", None), Err(IngestError::MissingFilename));
        assert_eq!(detect("   ", None), Err(IngestError::MissingFilename));
    }

    #[test]
    fn detect_ignores_declared_mime() {
        // The extension wins even when the declared MIME disagrees.
        let hint = detect("spec.json", Some("application/octet-stream")).unwrap();
        assert_eq!(hint, FormatHint::Json);
    }

    #[test]
    fn ingest_happy_path() {
        let upload = RawUpload::from_text("collection.json", "{\"info\":{}}");
        let detected = ingest(upload, &IngestConfig::default()).unwrap();
        assert_eq!(detected.hint, FormatHint::Json);
        assert_eq!(detected.text, "{\"info\":{}}");
    }

    #[test]
    fn ingest_rejects_empty_payload() {
        let upload = RawUpload {
            filename: "empty.json".into(),
            content_type: None,
            bytes: vec![],
        };
        let res = ingest(upload, &IngestConfig::default());
        assert_eq!(res, Err(IngestError::EmptyPayload));
    }

    #[test]
    fn ingest_enforces_size_limit() {
        let upload = RawUpload::from_text("big.md", "x".repeat(32));
        let cfg = IngestConfig {
            max_payload_bytes: Some(16),
        };
        let res = ingest(upload, &cfg);
        assert!(matches!(res, Err(IngestError::PayloadTooLarge(msg)) if msg.contains("32")));
    }

    #[test]
    fn ingest_rejects_invalid_utf8() {
        let upload = RawUpload {
            filename: "bad.json".into(),
            content_type: Some("application/json".into()),
            bytes: vec![0xff, 0xfe, 0x00],
        };
        let res = ingest(upload, &IngestConfig::default());
        assert!(matches!(res, Err(IngestError::InvalidUtf8(_))));
    }

    #[test]
    fn unsupported_extension_wins_over_payload_checks() {
        // data.csv must fail detection even with an empty body.
        let upload = RawUpload {
            filename: "data.csv".into(),
            content_type: None,
            bytes: vec![],
        };
        let res = ingest(upload, &IngestConfig::default());
        assert_eq!(res, Err(IngestError::UnsupportedFormat("csv".into())));
    }
}
