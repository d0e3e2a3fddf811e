//! Docugen renderer.
//!
//! [`render`] converts a [`CanonicalDocument`] into a self-contained HTML
//! page. It is a pure function: total over all four variants, never fails,
//! and byte-identical output for identical input. The interactive-view and
//! PDF invocations must produce visually consistent results, so determinism
//! is the renderer's key correctness property alongside totality.
//!
//! Dispatch is a closed `match` over the variant (enforced exhaustive by the
//! type system); each variant has its own render function and stylesheet.
//! Every optional field has a documented omission behavior, so no sub-case
//! can panic.

use canonical::CanonicalDocument;

mod generic;
mod html;
mod openapi;
mod postman;
mod style;

pub use crate::html::escape_html;

use crate::generic::render_generic;
use crate::html::page_shell;
use crate::openapi::render_openapi;
use crate::postman::render_postman;
use crate::style::{BASE_CSS, MARKDOWN_CSS};

/// Render a canonical document to presentation markup.
pub fn render(doc: &CanonicalDocument) -> String {
    let markup = match doc {
        CanonicalDocument::OpenApi(api) => render_openapi(api),
        CanonicalDocument::Postman(collection) => render_postman(collection),
        CanonicalDocument::Markdown { rendered_html } => render_markdown(rendered_html),
        CanonicalDocument::Generic(generic) => render_generic(generic),
    };
    tracing::debug!(kind = doc.kind(), markup_len = markup.len(), "render_complete");
    markup
}

/// Markdown layout: page shell with a title header, then the parse-time HTML
/// embedded as-is (trusted input).
fn render_markdown(rendered_html: &str) -> String {
    const PAGE_TITLE: &str = "Documentation";
    let body = format!("<h1>{PAGE_TITLE}</h1>\n{rendered_html}\n");
    let css = format!("{BASE_CSS}{MARKDOWN_CSS}");
    page_shell(PAGE_TITLE, &css, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonical::{
        GenericDoc, HeaderSpec, OpenApiDoc, OperationSpec, ParameterSpec, PostmanDoc, RequestBody,
        RequestSpec, ResponseSpec, ServerSpec,
    };
    use indexmap_order::ordered_endpoints;
    use serde_json::json;

    // Small helper namespace so endpoint maps read declaratively in tests.
    mod indexmap_order {
        use canonical::OperationSpec;
        use indexmap::IndexMap;

        pub fn ordered_endpoints(
            entries: Vec<(&str, Vec<(&str, OperationSpec)>)>,
        ) -> IndexMap<String, IndexMap<String, OperationSpec>> {
            entries
                .into_iter()
                .map(|(path, methods)| {
                    (
                        path.to_owned(),
                        methods
                            .into_iter()
                            .map(|(m, op)| (m.to_owned(), op))
                            .collect(),
                    )
                })
                .collect()
        }
    }

    fn swagger_doc() -> CanonicalDocument {
        let mut responses = indexmap::IndexMap::new();
        responses.insert("200".to_owned(), ResponseSpec { description: "ok".into() });

        CanonicalDocument::OpenApi(OpenApiDoc {
            title: "T".into(),
            version: "1".into(),
            description: None,
            servers: vec![],
            endpoints: ordered_endpoints(vec![(
                "/x",
                vec![(
                    "get",
                    OperationSpec {
                        summary: Some("S".into()),
                        description: None,
                        parameters: vec![],
                        responses,
                    },
                )],
            )]),
            schemas: indexmap::IndexMap::new(),
        })
    }

    #[test]
    fn swagger_scenario_badge_path_summary_and_green_200() {
        let markup = render(&swagger_doc());
        assert!(markup.contains("<span class=\"method get\">GET</span>"));
        assert!(markup.contains("/x"));
        assert!(markup.contains("S"));
        assert!(markup.contains("<span class=\"status success\">200</span>: ok"));
    }

    #[test]
    fn openapi_paths_and_methods_in_source_order() {
        let doc = CanonicalDocument::OpenApi(OpenApiDoc {
            title: "Ordered".into(),
            version: "1".into(),
            description: None,
            servers: vec![],
            endpoints: ordered_endpoints(vec![
                ("/zeta", vec![("post", OperationSpec::default()), ("get", OperationSpec::default())]),
                ("/alpha", vec![("delete", OperationSpec::default())]),
            ]),
            schemas: indexmap::IndexMap::new(),
        });
        let markup = render(&doc);

        let zeta = markup.find("/zeta").unwrap();
        let alpha = markup.find("/alpha").unwrap();
        assert!(zeta < alpha, "paths must render in declaration order");

        let post = markup.find("method post").unwrap();
        let get = markup.find("method get").unwrap();
        assert!(post < get, "methods must render in declaration order");
    }

    #[test]
    fn openapi_optional_sections_omitted() {
        let doc = CanonicalDocument::OpenApi(OpenApiDoc {
            title: "Bare".into(),
            version: "N/A".into(),
            description: None,
            servers: vec![],
            endpoints: indexmap::IndexMap::new(),
            schemas: indexmap::IndexMap::new(),
        });
        let markup = render(&doc);
        assert!(!markup.contains("<h2>Servers</h2>"));
        assert!(!markup.contains("<h2>Endpoints</h2>"));
        assert!(!markup.contains("<h2>Data Models</h2>"));
    }

    #[test]
    fn openapi_servers_and_schemas_sections() {
        let mut schemas = indexmap::IndexMap::new();
        schemas.insert("Pet".to_owned(), json!({"type": "object"}));

        let doc = CanonicalDocument::OpenApi(OpenApiDoc {
            title: "Full".into(),
            version: "2".into(),
            description: Some("desc".into()),
            servers: vec![ServerSpec {
                url: "https://api.example.com".into(),
                description: Some("prod".into()),
            }],
            endpoints: indexmap::IndexMap::new(),
            schemas,
        });
        let markup = render(&doc);
        assert!(markup.contains("<h2>Servers</h2>"));
        assert!(markup.contains("https://api.example.com"));
        assert!(markup.contains("<h2>Data Models</h2>"));
        assert!(markup.contains("Pet"));
        assert!(markup.contains("&quot;type&quot;: &quot;object&quot;"));
    }

    #[test]
    fn postman_scenario_name_badge_url() {
        let doc = CanonicalDocument::Postman(PostmanDoc {
            collection_name: "C".into(),
            collection_id: None,
            requests: vec![RequestSpec {
                name: "Ping".into(),
                method: "GET".into(),
                url: "http://h/ping".into(),
                headers: vec![],
                body: None,
            }],
        });
        let markup = render(&doc);
        assert!(markup.contains("Ping"));
        assert!(markup.contains("<span class=\"method get\">GET</span>"));
        assert!(markup.contains("http://h/ping"));
        // Missing collection id renders as N/A.
        assert!(markup.contains("<strong>Collection ID:</strong> N/A"));
    }

    #[test]
    fn postman_block_count_matches_requests() {
        let request = |name: &str| RequestSpec {
            name: name.into(),
            method: "POST".into(),
            url: "N/A".into(),
            headers: vec![],
            body: None,
        };
        let doc = CanonicalDocument::Postman(PostmanDoc {
            collection_name: "Many".into(),
            collection_id: Some("id-1".into()),
            requests: vec![request("a"), request("b"), request("c")],
        });
        let markup = render(&doc);
        assert_eq!(markup.matches("<div class=\"request\">").count(), 3);
    }

    #[test]
    fn postman_headers_and_body_only_when_present() {
        let doc = CanonicalDocument::Postman(PostmanDoc {
            collection_name: "HB".into(),
            collection_id: None,
            requests: vec![
                RequestSpec {
                    name: "with".into(),
                    method: "PUT".into(),
                    url: "u".into(),
                    headers: vec![HeaderSpec { key: "K".into(), value: "V".into() }],
                    body: Some(RequestBody::Raw("raw-body".into())),
                },
                RequestSpec {
                    name: "without".into(),
                    method: "PATCH".into(),
                    url: "u".into(),
                    headers: vec![],
                    body: None,
                },
            ],
        });
        let markup = render(&doc);
        assert_eq!(markup.matches("<h4>Headers</h4>").count(), 1);
        assert_eq!(markup.matches("<h4>Request Body</h4>").count(), 1);
        assert!(markup.contains("raw-body"));
        // Unrecognized method gets the neutral badge class.
        assert!(markup.contains("<span class=\"method other\">PATCH</span>"));
    }

    #[test]
    fn markdown_output_contains_parse_time_html() {
        let rendered = "<h2>Section</h2>\n<p>body <em>text</em></p>";
        let doc = CanonicalDocument::Markdown { rendered_html: rendered.into() };
        let markup = render(&doc);
        assert!(markup.contains(rendered), "markdown html must embed unmodified");
        assert!(markup.contains("<h1>Documentation</h1>"));
    }

    #[test]
    fn generic_arrays_show_item_count() {
        let mut fields = indexmap::IndexMap::new();
        fields.insert("items".to_owned(), json!([1, 2, 3, 4]));
        fields.insert("meta".to_owned(), json!({"k": "v"}));
        fields.insert("note".to_owned(), json!("plain"));

        let doc = CanonicalDocument::Generic(GenericDoc { fields });
        let markup = render(&doc);
        assert!(markup.contains("Array with 4 items"));
        assert!(markup.contains("&quot;k&quot;: &quot;v&quot;"));
        assert!(markup.contains("<p>plain</p>"));
    }

    #[test]
    fn render_is_deterministic() {
        let doc = swagger_doc();
        let first = render(&doc);
        let second = render(&doc);
        assert_eq!(first, second, "render must be byte-identical across calls");
    }

    #[test]
    fn user_text_is_escaped() {
        let doc = CanonicalDocument::Postman(PostmanDoc {
            collection_name: "<script>alert(1)</script>".into(),
            collection_id: None,
            requests: vec![],
        });
        let markup = render(&doc);
        assert!(!markup.contains("<script>alert(1)</script>"));
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
