//! Error-path tests across the pipeline surface.

use docugen::{
    process_upload, IngestConfig, IngestError, ParseError, PipelineError, RawUpload,
};

fn upload(filename: &str, text: &str) -> RawUpload {
    RawUpload::from_text(filename, text)
}

#[test]
fn unsupported_extension_is_rejected_before_parsing() {
    let result = process_upload(upload("data.csv", "a,b,c"), &IngestConfig::default());
    match result {
        Err(PipelineError::Ingest(IngestError::UnsupportedFormat(ext))) => {
            assert_eq!(ext, "csv");
        }
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn missing_extension_is_rejected() {
    let result = process_upload(upload("README", "text"), &IngestConfig::default());
    assert!(matches!(
        result,
        Err(PipelineError::Ingest(IngestError::UnsupportedFormat(_)))
    ));
}

#[test]
fn empty_payload_is_rejected() {
    let result = process_upload(upload("api.json", ""), &IngestConfig::default());
    assert!(matches!(
        result,
        Err(PipelineError::Ingest(IngestError::EmptyPayload))
    ));
}

#[test]
fn oversized_payload_is_rejected() {
    let cfg = IngestConfig {
        max_payload_bytes: Some(8),
    };
    let result = process_upload(upload("api.json", "{\"key\": \"too long\"}"), &cfg);
    assert!(matches!(
        result,
        Err(PipelineError::Ingest(IngestError::PayloadTooLarge(_)))
    ));
}

#[test]
fn malformed_json_reports_parse_error_not_generic() {
    // Syntactic failure must surface, never silently fall back.
    let result = process_upload(upload("broken.json", "{\"a\": "), &IngestConfig::default());
    match result {
        Err(PipelineError::Parse(ParseError::MalformedJson { filename, .. })) => {
            assert_eq!(filename, "broken.json");
        }
        other => panic!("expected MalformedJson, got {other:?}"),
    }
}

#[test]
fn malformed_yaml_reports_parse_error() {
    let result = process_upload(
        upload("broken.yaml", "key: [unclosed\n  - item"),
        &IngestConfig::default(),
    );
    assert!(matches!(
        result,
        Err(PipelineError::Parse(ParseError::MalformedYaml { .. }))
    ));
}

#[test]
fn invalid_utf8_is_rejected() {
    let raw = RawUpload {
        filename: "api.json".to_string(),
        content_type: None,
        bytes: vec![0xff, 0xfe, 0x7b],
    };
    let result = process_upload(raw, &IngestConfig::default());
    assert!(matches!(
        result,
        Err(PipelineError::Ingest(IngestError::InvalidUtf8(_)))
    ));
}

#[test]
fn structurally_invalid_openapi_falls_back_instead_of_failing() {
    // Well-formed JSON with an openapi marker but broken structure must not
    // produce an error: the cascade hands it to the generic parser.
    let text = r#"{"openapi": "3.0.0", "paths": "not-an-object"}"#;
    let doc = process_upload(upload("odd.json", text), &IngestConfig::default())
        .expect("well-formed JSON must classify");
    assert_eq!(doc.kind(), "generic");
}
