//! Postman collection recognition and extraction.
//!
//! The predicate keys off the collection's `info.schema` URL, which always
//! carries the substring `postman` (e.g.
//! `https://schema.getpostman.com/json/collection/v2.1.0/collection.json`).

use serde_json::Value;

use crate::access::{arr, obj, str_field, str_or};
use crate::model::{HeaderSpec, PostmanDoc, RequestBody, RequestSpec};

const DEFAULT_NAME: &str = "Postman Collection";
const DEFAULT_METHOD: &str = "UNKNOWN";
const DEFAULT_URL: &str = "N/A";

/// Cascade predicate: `info.schema` is a string containing `"postman"`.
pub fn matches(value: &Value) -> bool {
    value
        .get("info")
        .and_then(|info| str_field(info, "schema"))
        .is_some_and(|schema| schema.contains("postman"))
}

/// Extract the canonical collection. Infallible; missing fields take their
/// documented defaults.
pub fn from_value(value: &Value) -> PostmanDoc {
    let info = value.get("info").cloned().unwrap_or(Value::Null);

    let requests = arr(value, "item")
        .map(|items| items.iter().map(request_spec).collect())
        .unwrap_or_default();

    PostmanDoc {
        collection_name: str_or(&info, "name", DEFAULT_NAME),
        collection_id: str_field(&info, "_postman_id").map(str::to_owned),
        requests,
    }
}

fn request_spec(item: &Value) -> RequestSpec {
    let request = item.get("request").cloned().unwrap_or(Value::Null);

    RequestSpec {
        name: str_or(item, "name", ""),
        method: str_or(&request, "method", DEFAULT_METHOD),
        url: resolve_url(&request),
        headers: headers_of(&request),
        body: body_of(&request),
    }
}

/// URL fallback order: `url.raw` → joined `url.host` segments → `"N/A"`.
fn resolve_url(request: &Value) -> String {
    let Some(url) = request.get("url") else {
        return DEFAULT_URL.to_owned();
    };

    if let Some(raw) = str_field(url, "raw") {
        return raw.to_owned();
    }

    if let Some(host) = arr(url, "host") {
        let segments: Vec<&str> = host.iter().filter_map(Value::as_str).collect();
        if !segments.is_empty() {
            return segments.join("/");
        }
    }

    DEFAULT_URL.to_owned()
}

fn headers_of(request: &Value) -> Vec<HeaderSpec> {
    arr(request, "header")
        .map(|headers| {
            headers
                .iter()
                .map(|header| HeaderSpec {
                    key: str_or(header, "key", ""),
                    value: str_or(header, "value", ""),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Body preference: the raw string when present, otherwise the structured
/// body object.
fn body_of(request: &Value) -> Option<RequestBody> {
    let body = request.get("body")?;
    if body.is_null() {
        return None;
    }
    match str_field(body, "raw") {
        Some(raw) => Some(RequestBody::Raw(raw.to_owned())),
        None => Some(RequestBody::Structured(body.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection() -> Value {
        json!({
            "info": {
                "name": "Ops API",
                "_postman_id": "11e1-aaaa",
                "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
            },
            "item": [
                {
                    "name": "Ping",
                    "request": {
                        "method": "GET",
                        "url": {"raw": "http://h/ping"},
                        "header": [{"key": "Accept", "value": "application/json"}]
                    }
                },
                {
                    "name": "Create",
                    "request": {
                        "method": "POST",
                        "url": {"host": ["api", "example", "com"]},
                        "body": {"raw": "{\"a\":1}"}
                    }
                },
                {
                    "name": "Bare"
                }
            ]
        })
    }

    #[test]
    fn matches_on_schema_marker() {
        assert!(matches(&collection()));
        assert!(!matches(&json!({"info": {"schema": "https://json-schema.org"}})));
        assert!(!matches(&json!({"info": {"name": "no schema"}})));
        assert!(!matches(&json!({"item": []})));
    }

    #[test]
    fn one_request_per_item() {
        let doc = from_value(&collection());
        assert_eq!(doc.collection_name, "Ops API");
        assert_eq!(doc.collection_id.as_deref(), Some("11e1-aaaa"));
        assert_eq!(doc.requests.len(), 3);
    }

    #[test]
    fn url_fallback_order() {
        let doc = from_value(&collection());
        assert_eq!(doc.requests[0].url, "http://h/ping");
        assert_eq!(doc.requests[1].url, "api/example/com");
        assert_eq!(doc.requests[2].url, "N/A");
    }

    #[test]
    fn method_defaults_to_unknown() {
        let doc = from_value(&collection());
        assert_eq!(doc.requests[0].method, "GET");
        assert_eq!(doc.requests[2].method, "UNKNOWN");
    }

    #[test]
    fn body_prefers_raw_string() {
        let doc = from_value(&collection());
        assert_eq!(doc.requests[1].body, Some(RequestBody::Raw("{\"a\":1}".into())));
        assert_eq!(doc.requests[0].body, None);
    }

    #[test]
    fn structured_body_kept_when_raw_absent() {
        let value = json!({
            "info": {"schema": "postman"},
            "item": [{"name": "Form", "request": {
                "method": "POST",
                "url": {"raw": "http://h/form"},
                "body": {"mode": "formdata", "formdata": []}
            }}]
        });
        let doc = from_value(&value);
        match &doc.requests[0].body {
            Some(RequestBody::Structured(body)) => assert_eq!(body["mode"], "formdata"),
            other => panic!("expected structured body, got {other:?}"),
        }
    }
}
