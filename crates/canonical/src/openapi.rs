//! OpenAPI/Swagger structural validation and extraction.
//!
//! [`matches`] is the cascade predicate: a pure structural validator over the
//! decoded value. [`from_value`] is the extraction; it is infallible and may
//! only be called after `matches` returned true. A structural-validation
//! failure is never surfaced to the caller; the cascade falls through to the
//! next tier instead.

use indexmap::IndexMap;
use serde_json::Value;

use crate::access::{arr, bool_field, display_or, obj, str_field, str_or};
use crate::model::{OpenApiDoc, OperationSpec, ParameterSpec, ResponseSpec, ServerSpec};

const DEFAULT_TITLE: &str = "API Documentation";
const DEFAULT_VERSION: &str = "N/A";

/// Structural validation: does this decoded value look like an
/// OpenAPI/Swagger document?
///
/// Requirements:
/// - top-level object carrying an `openapi` or `swagger` key whose value is
///   a string or number (`swagger: 2.0` decodes as a number from YAML);
/// - `info`, `paths`, `components` are objects when present;
/// - every entry under `paths` is itself an object;
/// - `servers` is an array when present.
///
/// This is internal-consistency checking, not a full schema validation:
/// malformed-but-shaped documents pass and render best-effort.
pub fn matches(value: &Value) -> bool {
    let Some(root) = value.as_object() else {
        return false;
    };

    let version_marker = root.get("openapi").or_else(|| root.get("swagger"));
    match version_marker {
        Some(Value::String(_)) | Some(Value::Number(_)) => {}
        _ => return false,
    }

    if let Some(info) = root.get("info") {
        if !info.is_object() {
            return false;
        }
    }
    if let Some(paths) = root.get("paths") {
        let Some(paths) = paths.as_object() else {
            return false;
        };
        if !paths.values().all(Value::is_object) {
            return false;
        }
    }
    if let Some(servers) = root.get("servers") {
        if !servers.is_array() {
            return false;
        }
    }
    if let Some(components) = root.get("components") {
        if !components.is_object() {
            return false;
        }
    }

    true
}

/// Extract the canonical document. Total over any value `matches` accepted;
/// missing optionals take their documented defaults.
pub fn from_value(value: &Value) -> OpenApiDoc {
    let info = value.get("info").cloned().unwrap_or(Value::Null);

    let servers = arr(value, "servers")
        .map(|entries| entries.iter().map(server_spec).collect())
        .unwrap_or_default();

    let endpoints = obj(value, "paths")
        .map(|paths| {
            paths
                .iter()
                .map(|(path, methods)| (path.clone(), operations_of(methods)))
                .collect()
        })
        .unwrap_or_default();

    let schemas = value
        .get("components")
        .and_then(|c| obj(c, "schemas"))
        .map(|schemas| {
            schemas
                .iter()
                .map(|(name, schema)| (name.clone(), schema.clone()))
                .collect()
        })
        .unwrap_or_default();

    OpenApiDoc {
        title: str_or(&info, "title", DEFAULT_TITLE),
        version: display_or(&info, "version", DEFAULT_VERSION),
        description: str_field(&info, "description").map(str::to_owned),
        servers,
        endpoints,
        schemas,
    }
}

fn server_spec(entry: &Value) -> ServerSpec {
    ServerSpec {
        url: str_or(entry, "url", ""),
        description: str_field(entry, "description").map(str::to_owned),
    }
}

fn operations_of(methods: &Value) -> IndexMap<String, OperationSpec> {
    let Some(methods) = methods.as_object() else {
        // `matches` guarantees path entries are objects; kept total anyway.
        return IndexMap::new();
    };
    methods
        .iter()
        .map(|(method, details)| (method.clone(), operation_spec(details)))
        .collect()
}

fn operation_spec(details: &Value) -> OperationSpec {
    let parameters = arr(details, "parameters")
        .map(|params| params.iter().map(parameter_spec).collect())
        .unwrap_or_default();

    let responses = obj(details, "responses")
        .map(|responses| {
            responses
                .iter()
                .map(|(code, response)| {
                    (
                        code.clone(),
                        ResponseSpec {
                            description: str_or(response, "description", ""),
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    OperationSpec {
        summary: str_field(details, "summary").map(str::to_owned),
        description: str_field(details, "description").map(str::to_owned),
        parameters,
        responses,
    }
}

fn parameter_spec(param: &Value) -> ParameterSpec {
    // Type lives under `schema.type` (OpenAPI 3); `"string"` when absent.
    let schema_type = param
        .get("schema")
        .and_then(|schema| str_field(schema, "type"))
        .unwrap_or("string")
        .to_owned();

    ParameterSpec {
        name: str_or(param, "name", ""),
        schema_type,
        location: str_or(param, "in", ""),
        required: bool_field(param, "required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn petstore() -> Value {
        json!({
            "openapi": "3.0.0",
            "info": {
                "title": "Petstore",
                "version": "1.2.3",
                "description": "Pets as a service"
            },
            "servers": [
                {"url": "https://api.example.com", "description": "prod"},
                {"url": "https://staging.example.com"}
            ],
            "paths": {
                "/pets": {
                    "get": {
                        "summary": "List pets",
                        "parameters": [
                            {"name": "limit", "in": "query", "required": false,
                             "schema": {"type": "integer"}},
                            {"name": "tag", "in": "query"}
                        ],
                        "responses": {
                            "200": {"description": "ok"},
                            "404": {"description": "none"}
                        }
                    },
                    "post": {"summary": "Create pet", "responses": {"201": {"description": "created"}}}
                },
                "/pets/{id}": {
                    "delete": {"responses": {"204": {"description": "gone"}}}
                }
            },
            "components": {
                "schemas": {
                    "Pet": {"type": "object"},
                    "Error": {"type": "object"}
                }
            }
        })
    }

    #[test]
    fn matches_requires_version_marker() {
        assert!(matches(&petstore()));
        assert!(matches(&json!({"swagger": "2.0"})));
        assert!(matches(&json!({"swagger": 2.0})));
        assert!(!matches(&json!({"info": {"title": "no marker"}})));
        assert!(!matches(&json!("just a string")));
        assert!(!matches(&json!({"openapi": {"nested": true}})));
    }

    #[test]
    fn matches_shape_checks_sections() {
        assert!(!matches(&json!({"openapi": "3.0.0", "paths": "nope"})));
        assert!(!matches(&json!({"openapi": "3.0.0", "paths": {"/x": "nope"}})));
        assert!(!matches(&json!({"openapi": "3.0.0", "info": []})));
        assert!(!matches(&json!({"openapi": "3.0.0", "servers": {}})));
        assert!(!matches(&json!({"openapi": "3.0.0", "components": 4})));
    }

    #[test]
    fn extraction_preserves_declaration_order() {
        let doc = from_value(&petstore());
        let paths: Vec<&String> = doc.endpoints.keys().collect();
        assert_eq!(paths, ["/pets", "/pets/{id}"]);

        let methods: Vec<&String> = doc.endpoints["/pets"].keys().collect();
        assert_eq!(methods, ["get", "post"]);

        let schemas: Vec<&String> = doc.schemas.keys().collect();
        assert_eq!(schemas, ["Pet", "Error"]);
    }

    #[test]
    fn parameter_type_defaults_to_string() {
        let doc = from_value(&petstore());
        let params = &doc.endpoints["/pets"]["get"].parameters;
        assert_eq!(params[0].schema_type, "integer");
        assert_eq!(params[1].schema_type, "string");
        assert!(!params[1].required);
    }

    #[test]
    fn info_defaults_applied() {
        let doc = from_value(&json!({"openapi": "3.0.0"}));
        assert_eq!(doc.title, "API Documentation");
        assert_eq!(doc.version, "N/A");
        assert_eq!(doc.description, None);
        assert!(doc.servers.is_empty());
        assert!(doc.endpoints.is_empty());
        assert!(doc.schemas.is_empty());
    }

    #[test]
    fn numeric_version_is_formatted() {
        let doc = from_value(&json!({"swagger": 2.0, "info": {"title": "T", "version": 1}}));
        assert_eq!(doc.version, "1");
    }

    #[test]
    fn responses_copied_key_for_key() {
        let doc = from_value(&petstore());
        let responses = &doc.endpoints["/pets"]["get"].responses;
        let codes: Vec<&String> = responses.keys().collect();
        assert_eq!(codes, ["200", "404"]);
        assert_eq!(responses["200"].description, "ok");
    }
}
