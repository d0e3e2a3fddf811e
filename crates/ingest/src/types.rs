//! Data model for the upload ingest stage.
//!
//! [`RawUpload`] is what the HTTP layer hands us: the bytes as received plus
//! the filename and MIME type the client declared. [`ingest`](crate::ingest)
//! turns it into a [`DetectedUpload`]: validated UTF-8 text tagged with the
//! [`FormatHint`] that tells the parsing stage which grammar to attempt.
//!
//! ```text
//! RawUpload
//! ├── filename: String
//! ├── content_type: Option<String>
//! └── bytes: Vec<u8>
//!
//!         ↓ ingest()
//!
//! DetectedUpload
//! ├── filename: String
//! ├── hint: FormatHint
//! └── text: String (validated UTF-8)
//! ```

use serde::{Deserialize, Serialize};

/// An uploaded file exactly as received from the transport layer.
///
/// The buffer is immutable once constructed and is consumed by value by
/// [`ingest`](crate::ingest); nothing is retained beyond the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawUpload {
    /// Filename as declared by the client. Detection keys off its extension.
    pub filename: String,

    /// MIME type as declared by the client. Recorded for logging only; the
    /// extension is authoritative for format detection.
    pub content_type: Option<String>,

    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl RawUpload {
    /// Build an upload from text content, mostly useful in tests.
    pub fn from_text(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes: text.into().into_bytes(),
        }
    }

    /// The lowercased extension of the declared filename, without the dot.
    /// `None` when the filename has no dot (or ends with one).
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.filename)
    }
}

pub(crate) fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// The detector's decision about which grammar the parsing stage should
/// attempt. One hint per supported extension family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormatHint {
    /// `.json`: OpenAPI/Swagger, Postman, or generic JSON (classified by
    /// the parser cascade).
    Json,
    /// `.yaml` / `.yml`: OpenAPI or generic YAML.
    Yaml,
    /// `.md`: Markdown, rendered to HTML unconditionally.
    Markdown,
}

impl FormatHint {
    /// Map a lowercased extension to a hint. `None` means unsupported.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(FormatHint::Json),
            "yaml" | "yml" => Some(FormatHint::Yaml),
            "md" => Some(FormatHint::Markdown),
            _ => None,
        }
    }

    /// Stable lowercase name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatHint::Json => "json",
            FormatHint::Yaml => "yaml",
            FormatHint::Markdown => "markdown",
        }
    }
}

/// A validated upload ready for the parsing stage.
///
/// Guarantees: `text` is non-empty valid UTF-8 within the configured size
/// limit, and `hint` corresponds to a supported extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectedUpload {
    /// Filename carried through for error reporting.
    pub filename: String,

    /// Which grammar the parser should attempt.
    pub hint: FormatHint,

    /// The upload content, decoded as UTF-8.
    pub text: String,
}
