//! Workspace umbrella crate for docugen.
//!
//! This crate stitches together ingestion, classification, and rendering so
//! callers can turn an uploaded documentation file into a canonical document
//! or a complete HTML page with a single API entry point.

pub use canonical::{
    CanonicalDocument, GenericDoc, HeaderSpec, OpenApiDoc, OperationSpec, ParameterSpec,
    ParseError, PostmanDoc, RequestBody, RequestSpec, ResponseSpec, ServerSpec, classify_value,
    parse_upload,
};
pub use export::{EngineError, ExportError, HttpPdfEngine, PdfEngine, PdfOptions, to_pdf};
pub use ingest::{DetectedUpload, FormatHint, IngestConfig, IngestError, RawUpload, detect, ingest};
pub use render::render;

use thiserror::Error;

/// Errors that can occur while processing an upload through the pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("ingest failure: {0}")]
    Ingest(#[from] IngestError),
    #[error("parse failure: {0}")]
    Parse(#[from] ParseError),
}

/// Process an uploaded file end-to-end: detect its format, validate the
/// payload, and classify it into a canonical document.
pub fn process_upload(
    raw: RawUpload,
    cfg: &IngestConfig,
) -> Result<CanonicalDocument, PipelineError> {
    let detected = ingest(raw, cfg)?;
    let doc = parse_upload(&detected)?;
    Ok(doc)
}

/// Convenience helper that runs the full upload pipeline and renders the
/// result as a self-contained HTML page.
pub fn document_to_html(raw: RawUpload, cfg: &IngestConfig) -> Result<String, PipelineError> {
    let doc = process_upload(raw, cfg)?;
    Ok(render(&doc))
}
