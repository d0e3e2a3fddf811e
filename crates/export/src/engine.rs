use async_trait::async_trait;
use serde::Serialize;

use crate::error::EngineError;
use crate::options::PdfOptions;

/// A PDF rendering engine.
///
/// The engine is treated as a black box: it takes complete HTML markup plus
/// layout options and yields raw PDF bytes. Implementations may shell out,
/// call a sidecar process, or talk to a remote service.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    async fn render_pdf(&self, html: &str, options: &PdfOptions) -> Result<Vec<u8>, EngineError>;
}

/// Engine backed by an HTTP rendering service.
///
/// Posts `{ "html": ..., "options": ... }` to the configured endpoint and
/// expects the PDF bytes back as the response body.
pub struct HttpPdfEngine {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    html: &'a str,
    options: &'a PdfOptions,
}

impl HttpPdfEngine {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpPdfEngine {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PdfEngine for HttpPdfEngine {
    async fn render_pdf(&self, html: &str, options: &PdfOptions) -> Result<Vec<u8>, EngineError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RenderRequest { html, options })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(EngineError(format!(
                "engine returned {status}: {detail}"
            )));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
