//! Docugen PDF export adapter.
//!
//! Export takes rendered HTML markup, pairs it with the standard layout
//! options, and hands both to a [`PdfEngine`]. The engine call is bounded:
//! [`to_pdf`] wraps it in a timeout so a stalled engine surfaces as
//! [`ExportError::Timeout`] instead of hanging the caller.

use std::time::Duration;

mod engine;
mod error;
mod options;

pub use crate::engine::{HttpPdfEngine, PdfEngine};
pub use crate::error::{EngineError, ExportError};
pub use crate::options::{PdfMargins, PdfOptions};

/// Render `markup` to PDF bytes through `engine`, waiting at most `timeout`.
///
/// Engine failures and timeouts are reported separately so callers can tell
/// a broken engine from a slow one.
pub async fn to_pdf(
    engine: &dyn PdfEngine,
    markup: &str,
    timeout: Duration,
) -> Result<Vec<u8>, ExportError> {
    let options = PdfOptions::standard();
    let started = std::time::Instant::now();

    let outcome = tokio::time::timeout(timeout, engine.render_pdf(markup, &options)).await;

    match outcome {
        Ok(Ok(bytes)) => {
            tracing::info!(
                pdf_bytes = bytes.len(),
                elapsed_micros = started.elapsed().as_micros() as u64,
                "export_success"
            );
            Ok(bytes)
        }
        Ok(Err(err)) => {
            tracing::warn!(
                error = %err,
                elapsed_micros = started.elapsed().as_micros() as u64,
                "export_failure"
            );
            Err(ExportError::Engine(err.to_string()))
        }
        Err(_) => {
            let secs = timeout.as_secs();
            tracing::warn!(timeout_secs = secs, "export_timeout");
            Err(ExportError::Timeout(secs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedEngine(Vec<u8>);

    #[async_trait]
    impl PdfEngine for FixedEngine {
        async fn render_pdf(
            &self,
            _html: &str,
            _options: &PdfOptions,
        ) -> Result<Vec<u8>, EngineError> {
            Ok(self.0.clone())
        }
    }

    struct FailingEngine;

    #[async_trait]
    impl PdfEngine for FailingEngine {
        async fn render_pdf(
            &self,
            _html: &str,
            _options: &PdfOptions,
        ) -> Result<Vec<u8>, EngineError> {
            Err(EngineError("renderer crashed".into()))
        }
    }

    struct StallingEngine;

    #[async_trait]
    impl PdfEngine for StallingEngine {
        async fn render_pdf(
            &self,
            _html: &str,
            _options: &PdfOptions,
        ) -> Result<Vec<u8>, EngineError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn successful_engine_returns_bytes() {
        let engine = FixedEngine(b"%PDF-1.7 fake".to_vec());
        let bytes = to_pdf(&engine, "<html></html>", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(bytes, b"%PDF-1.7 fake");
    }

    #[tokio::test]
    async fn engine_failure_surfaces_as_engine_error() {
        let err = to_pdf(&FailingEngine, "<html></html>", Duration::from_secs(5))
            .await
            .unwrap_err();
        match err {
            ExportError::Engine(message) => assert!(message.contains("renderer crashed")),
            other => panic!("expected Engine error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_engine_times_out() {
        let err = to_pdf(&StallingEngine, "<html></html>", Duration::from_secs(30))
            .await
            .unwrap_err();
        assert_eq!(err, ExportError::Timeout(30));
    }
}
