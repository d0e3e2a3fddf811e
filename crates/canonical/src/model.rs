//! The canonical document model.
//!
//! [`CanonicalDocument`] is the normalized shape every parser converges to
//! and the single contract the renderer depends on. Exactly one variant is
//! active per parsed upload, and a document is immutable once constructed.
//!
//! # Ordering
//!
//! All maps are [`IndexMap`]s and all decoded JSON objects are
//! order-preserving, so `endpoints`, `schemas`, per-operation `responses`,
//! and `GenericDoc.fields` keep their source declaration order. That order is
//! significant: the renderer emits it verbatim, and output stability depends
//! on it.
//!
//! # Wire shape
//!
//! The union serializes internally tagged under `"kind"`
//! (`openApi` / `postman` / `markdown` / `generic`). The upload endpoint
//! special-cases the Markdown variant as a bare HTML string; see the server
//! crate.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The normalized, format-agnostic representation of a parsed upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CanonicalDocument {
    /// OpenAPI/Swagger document (JSON or YAML source).
    OpenApi(OpenApiDoc),
    /// Postman collection (JSON source).
    Postman(PostmanDoc),
    /// Markdown, already rendered to HTML at parse time.
    #[serde(rename_all = "camelCase")]
    Markdown { rendered_html: String },
    /// Fallback for JSON/YAML that matches no recognized shape.
    Generic(GenericDoc),
}

impl CanonicalDocument {
    /// Stable lowercase variant name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CanonicalDocument::OpenApi(_) => "openapi",
            CanonicalDocument::Postman(_) => "postman",
            CanonicalDocument::Markdown { .. } => "markdown",
            CanonicalDocument::Generic(_) => "generic",
        }
    }
}

/// Canonical form of an OpenAPI/Swagger document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenApiDoc {
    /// `info.title`, defaulting to `"API Documentation"`.
    pub title: String,
    /// `info.version`, defaulting to `"N/A"`.
    pub version: String,
    /// `info.description` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `servers` in source order.
    #[serde(default)]
    pub servers: Vec<ServerSpec>,
    /// `paths`, path → method → operation, both levels in source order.
    #[serde(default)]
    pub endpoints: IndexMap<String, IndexMap<String, OperationSpec>>,
    /// `components.schemas` copied verbatim, in source order.
    #[serde(default)]
    pub schemas: IndexMap<String, Value>,
}

/// One entry of the `servers` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSpec {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One HTTP operation under a path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared parameters in source order.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Status-code string → response, in source order.
    #[serde(default)]
    pub responses: IndexMap<String, ResponseSpec>,
}

/// One operation parameter row: name / type / location / required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    /// `schema.type`, defaulting to `"string"` when absent.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// The `in` field (`query`, `path`, `header`, ...).
    pub location: String,
    pub required: bool,
}

/// One response entry under an operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseSpec {
    #[serde(default)]
    pub description: String,
}

/// Canonical form of a Postman collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostmanDoc {
    /// `info.name`, defaulting to `"Postman Collection"`.
    pub collection_name: String,
    /// `info._postman_id` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// The `item` array, one entry per request, in source order.
    #[serde(default)]
    pub requests: Vec<RequestSpec>,
}

/// One request of a Postman collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestSpec {
    pub name: String,
    /// `request.method`, defaulting to `"UNKNOWN"`.
    pub method: String,
    /// Resolved URL: `request.url.raw`, else joined `request.url.host`
    /// segments, else `"N/A"`.
    pub url: String,
    /// `request.header` entries in source order.
    #[serde(default)]
    pub headers: Vec<HeaderSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

/// One request header key/value pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderSpec {
    pub key: String,
    pub value: String,
}

/// A request body: the raw string when the collection carries one, otherwise
/// the structured body object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestBody {
    Raw(String),
    Structured(Value),
}

/// Fallback document: an ordered key → value view of the decoded input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenericDoc {
    pub fields: IndexMap<String, Value>,
}
