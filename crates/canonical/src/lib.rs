//! Docugen canonical layer.
//!
//! Takes a [`DetectedUpload`] from the ingest stage and produces the one
//! [`CanonicalDocument`] the renderer depends on. Each format family runs
//! through an explicit ordered cascade of `(predicate, constructor)` pairs,
//! first match wins:
//!
//! - **JSON**: OpenAPI structural validation → Postman schema marker →
//!   generic fallback.
//! - **YAML**: OpenAPI structural validation → generic fallback (there is no
//!   Postman-over-YAML tier).
//! - **Markdown**: rendered to HTML unconditionally, no cascade.
//!
//! Predicates are pure and side-effect-free so every tier is testable in
//! isolation. Syntax errors ([`ParseError::MalformedJson`] /
//! [`ParseError::MalformedYaml`]) are terminal and carry the offending
//! filename; a structural-validation miss merely falls through to the next
//! tier.
//!
//! ## Example
//!
//! ```
//! use canonical::{parse_upload, CanonicalDocument};
//! use ingest::{DetectedUpload, FormatHint};
//!
//! let upload = DetectedUpload {
//!     filename: "api.json".into(),
//!     hint: FormatHint::Json,
//!     text: r#"{"openapi":"3.0.0","info":{"title":"T","version":"1"}}"#.into(),
//! };
//!
//! let doc = parse_upload(&upload).unwrap();
//! assert!(matches!(doc, CanonicalDocument::OpenApi(_)));
//! ```

use std::time::Instant;

use serde_json::Value;
use tracing::{info, warn};

use ingest::{DetectedUpload, FormatHint};

mod access;
mod error;
pub mod generic;
pub mod markdown;
mod model;
pub mod openapi;
pub mod postman;

pub use crate::error::ParseError;
pub use crate::model::{
    CanonicalDocument, GenericDoc, HeaderSpec, OpenApiDoc, OperationSpec, ParameterSpec,
    PostmanDoc, RequestBody, RequestSpec, ResponseSpec, ServerSpec,
};

/// One tier of the classification cascade: a pure predicate over the decoded
/// value paired with an infallible constructor.
type Tier = (fn(&Value) -> bool, fn(&Value) -> CanonicalDocument);

fn construct_openapi(value: &Value) -> CanonicalDocument {
    CanonicalDocument::OpenApi(openapi::from_value(value))
}

fn construct_postman(value: &Value) -> CanonicalDocument {
    CanonicalDocument::Postman(postman::from_value(value))
}

fn construct_generic(value: &Value) -> CanonicalDocument {
    CanonicalDocument::Generic(generic::from_value(value))
}

/// JSON tiers: strict OpenAPI parse first, then the Postman marker, then the
/// permissive generic fallback.
const JSON_TIERS: &[Tier] = &[
    (openapi::matches, construct_openapi),
    (postman::matches, construct_postman),
    (generic::always, construct_generic),
];

/// YAML tiers: OpenAPI or generic. Postman-over-YAML is not supported.
const YAML_TIERS: &[Tier] = &[
    (openapi::matches, construct_openapi),
    (generic::always, construct_generic),
];

/// Classify a decoded JSON value through the JSON cascade.
///
/// Also used by the export endpoint to re-classify documents a client sends
/// back in their raw (untagged) form.
pub fn classify_value(value: &Value) -> CanonicalDocument {
    run_cascade(JSON_TIERS, value)
}

fn run_cascade(tiers: &[Tier], value: &Value) -> CanonicalDocument {
    for (predicate, construct) in tiers {
        if predicate(value) {
            return construct(value);
        }
    }
    // The generic tier always matches; unreachable but kept total.
    construct_generic(value)
}

/// Parse a detected upload into its canonical document.
pub fn parse_upload(upload: &DetectedUpload) -> Result<CanonicalDocument, ParseError> {
    let start = Instant::now();

    match parse_inner(upload) {
        Ok(doc) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                filename = %upload.filename,
                hint = upload.hint.as_str(),
                kind = doc.kind(),
                elapsed_micros,
                "parse_success"
            );
            Ok(doc)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(filename = %upload.filename, error = %err, elapsed_micros, "parse_failure");
            Err(err)
        }
    }
}

fn parse_inner(upload: &DetectedUpload) -> Result<CanonicalDocument, ParseError> {
    match upload.hint {
        FormatHint::Json => {
            let value: Value =
                serde_json::from_str(&upload.text).map_err(|err| ParseError::MalformedJson {
                    filename: upload.filename.clone(),
                    message: err.to_string(),
                })?;
            Ok(run_cascade(JSON_TIERS, &value))
        }
        FormatHint::Yaml => {
            let value: Value =
                serde_yaml::from_str(&upload.text).map_err(|err| ParseError::MalformedYaml {
                    filename: upload.filename.clone(),
                    message: err.to_string(),
                })?;
            Ok(run_cascade(YAML_TIERS, &value))
        }
        FormatHint::Markdown => Ok(CanonicalDocument::Markdown {
            rendered_html: markdown::to_html(&upload.text),
        }),
    }
}
