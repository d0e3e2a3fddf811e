//! Postman collection layout: name/id banner, then one block per request
//! with a method badge, the resolved URL, headers, and body.

use std::fmt::Write;

use canonical::{PostmanDoc, RequestBody};

use crate::html::{escape_html, json_block, method_badge, page_shell};
use crate::style::{BADGE_CSS, BASE_CSS, POSTMAN_CSS};

pub fn render_postman(doc: &PostmanDoc) -> String {
    let mut body = String::new();

    let _ = write!(body, "<h1>{}</h1>\n", escape_html(&doc.collection_name));
    let collection_id = doc.collection_id.as_deref().unwrap_or("N/A");
    let _ = write!(
        body,
        "<p><strong>Collection ID:</strong> {}</p>\n",
        escape_html(collection_id)
    );

    if !doc.requests.is_empty() {
        body.push_str("<h2>API Requests</h2>\n");
        for request in &doc.requests {
            body.push_str("<div class=\"request\">\n");
            let _ = write!(body, "<h3>{}</h3>\n", escape_html(&request.name));
            let _ = write!(
                body,
                "<div class=\"section\">{}<span class=\"url\">{}</span></div>\n",
                method_badge(&request.method),
                escape_html(&request.url)
            );

            if !request.headers.is_empty() {
                body.push_str("<div class=\"section\"><h4>Headers</h4>\n");
                for header in &request.headers {
                    let _ = write!(
                        body,
                        "<div class=\"header-item\"><strong>{}:</strong> {}</div>\n",
                        escape_html(&header.key),
                        escape_html(&header.value)
                    );
                }
                body.push_str("</div>\n");
            }

            if let Some(request_body) = &request.body {
                body.push_str("<div class=\"section\"><h4>Request Body</h4>\n");
                match request_body {
                    RequestBody::Raw(raw) => {
                        let _ = write!(body, "<pre>{}</pre>\n", escape_html(raw));
                    }
                    RequestBody::Structured(value) => {
                        body.push_str(&json_block(value));
                        body.push('\n');
                    }
                }
                body.push_str("</div>\n");
            }

            body.push_str("</div>\n");
        }
    }

    let css = format!("{BASE_CSS}{BADGE_CSS}{POSTMAN_CSS}");
    page_shell(&doc.collection_name, &css, &body)
}
