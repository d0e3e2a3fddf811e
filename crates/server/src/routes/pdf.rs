use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use canonical::CanonicalDocument;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Export request body
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Parsed document previously returned by the upload endpoint
    #[serde(rename = "parsedData")]
    pub parsed_data: Option<Value>,

    /// Base name for the downloaded file (without extension)
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

/// Export a previously parsed document as PDF.
///
/// The body carries `parsedData` exactly as returned by the upload endpoint.
/// The document is re-rendered to HTML and handed to the PDF engine; the
/// response is the raw PDF bytes with an attachment disposition.
pub async fn export_pdf(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ExportRequest>,
) -> ServerResult<impl IntoResponse> {
    let parsed = request.parsed_data.ok_or_else(|| {
        ServerError::MissingInput("export request must include 'parsedData'".to_string())
    })?;

    let doc = resolve_document(parsed);
    let markup = render::render(&doc);
    let bytes = export::to_pdf(
        state.pdf_engine.as_ref(),
        &markup,
        state.config.pdf_timeout(),
    )
    .await?;

    let file_name = sanitize_file_name(request.file_name.as_deref());
    let disposition = format!("attachment; filename=\"{file_name}.pdf\"");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// Reconstruct a canonical document from its wire shape.
///
/// Markdown arrives as a bare HTML string. Tagged objects deserialize
/// directly. Anything else (clients occasionally post raw specs here) is
/// classified through the same cascade as uploads.
fn resolve_document(value: Value) -> CanonicalDocument {
    if let Value::String(rendered_html) = value {
        return CanonicalDocument::Markdown { rendered_html };
    }

    match serde_json::from_value::<CanonicalDocument>(value.clone()) {
        Ok(doc) => doc,
        Err(_) => canonical::classify_value(&value),
    }
}

const DEFAULT_FILE_NAME: &str = "documentation";

/// Keep the download name header-safe: drop path separators, quotes, and
/// control characters; fall back to the default when nothing survives.
fn sanitize_file_name(requested: Option<&str>) -> String {
    let cleaned: String = requested
        .unwrap_or(DEFAULT_FILE_NAME)
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | '"' | ';'))
        .collect();

    let trimmed = cleaned.trim().trim_end_matches(".pdf").trim();
    if trimmed.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
