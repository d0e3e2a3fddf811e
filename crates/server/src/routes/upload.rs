use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use canonical::CanonicalDocument;
use ingest::{IngestConfig, RawUpload};
use serde_json::json;
use std::sync::Arc;

/// Upload a documentation file and classify it.
///
/// Accepts a multipart form with a single `file` field. The file is detected
/// by extension, parsed, and classified into its canonical representation,
/// which is returned as `parsedData`. Markdown files return the rendered
/// HTML fragment directly as a string; structured formats return the tagged
/// document object.
pub async fn upload_document(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> ServerResult<impl IntoResponse> {
    let raw = extract_file_field(&mut multipart).await?;

    let cfg = IngestConfig {
        max_payload_bytes: Some(state.config.max_body_size()),
    };
    let doc = docugen::process_upload(raw, &cfg)?;

    Ok(Json(json!({
        "message": "File uploaded and parsed successfully",
        "parsedData": document_wire_value(&doc),
    })))
}

/// Pull the `file` field out of the multipart form.
async fn extract_file_field(multipart: &mut Multipart) -> ServerResult<RawUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or(ServerError::Ingest(ingest::IngestError::MissingFilename))?;
        let content_type = field.content_type().map(|s| s.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(format!("Failed to read upload: {e}")))?;

        return Ok(RawUpload {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(ServerError::MissingInput(
        "multipart form must contain a 'file' field".to_string(),
    ))
}

/// The wire shape of a parsed document. Markdown flattens to its rendered
/// HTML string; all other kinds serialize as tagged objects. Infallible:
/// every variant is string-keyed data that serializes cleanly.
pub fn document_wire_value(doc: &CanonicalDocument) -> serde_json::Value {
    match doc {
        CanonicalDocument::Markdown { rendered_html } => {
            serde_json::Value::String(rendered_html.clone())
        }
        other => serde_json::to_value(other).unwrap_or(serde_json::Value::Null),
    }
}
