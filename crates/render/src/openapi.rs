//! OpenAPI document layout: title/version/description, servers, endpoints
//! with parameter tables and colored response lists, then data models.

use std::fmt::Write;

use canonical::{OpenApiDoc, OperationSpec};

use crate::html::{escape_html, json_block, method_badge, page_shell, status_class};
use crate::style::{BADGE_CSS, BASE_CSS, OPENAPI_CSS};

pub fn render_openapi(doc: &OpenApiDoc) -> String {
    let mut body = String::new();

    let _ = write!(body, "<h1>{}</h1>\n", escape_html(&doc.title));
    let _ = write!(
        body,
        "<p><strong>Version:</strong> {}</p>\n",
        escape_html(&doc.version)
    );
    if let Some(description) = &doc.description {
        let _ = write!(body, "<p>{}</p>\n", escape_html(description));
    }

    if !doc.servers.is_empty() {
        body.push_str("<h2>Servers</h2>\n");
        for server in &doc.servers {
            body.push_str("<div class=\"server\"><strong>");
            body.push_str(&escape_html(&server.url));
            body.push_str("</strong>");
            if let Some(description) = &server.description {
                let _ = write!(body, "<br><small>{}</small>", escape_html(description));
            }
            body.push_str("</div>\n");
        }
    }

    if !doc.endpoints.is_empty() {
        body.push_str("<h2>Endpoints</h2>\n");
        for (path, methods) in &doc.endpoints {
            let _ = write!(
                body,
                "<div class=\"endpoint\">\n<h3 class=\"path\">{}</h3>\n",
                escape_html(path)
            );
            for (method, operation) in methods {
                push_operation(&mut body, method, operation);
            }
            body.push_str("</div>\n");
        }
    }

    if !doc.schemas.is_empty() {
        body.push_str("<h2>Data Models</h2>\n");
        for (name, schema) in &doc.schemas {
            let _ = write!(
                body,
                "<div class=\"endpoint\">\n<h3>{}</h3>\n{}\n</div>\n",
                escape_html(name),
                json_block(schema)
            );
        }
    }

    let css = format!("{BASE_CSS}{BADGE_CSS}{OPENAPI_CSS}");
    page_shell(&doc.title, &css, &body)
}

fn push_operation(body: &mut String, method: &str, operation: &OperationSpec) {
    body.push_str("<div class=\"section\">\n");
    body.push_str(&method_badge(method));

    let summary = operation.summary.as_deref().unwrap_or("No summary");
    let _ = write!(body, "<strong>{}</strong>\n", escape_html(summary));
    if let Some(description) = &operation.description {
        let _ = write!(body, "<p>{}</p>\n", escape_html(description));
    }

    if !operation.parameters.is_empty() {
        body.push_str(
            "<h4>Parameters</h4>\n<table><tr><th>Name</th><th>Type</th><th>Location</th><th>Required</th></tr>",
        );
        for param in &operation.parameters {
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&param.name),
                escape_html(&param.schema_type),
                escape_html(&param.location),
                if param.required { "Yes" } else { "No" }
            );
        }
        body.push_str("</table>\n");
    }

    if !operation.responses.is_empty() {
        body.push_str("<h4>Responses</h4>\n");
        for (code, response) in &operation.responses {
            let _ = write!(
                body,
                "<div><span class=\"status {}\">{}</span>: {}</div>\n",
                status_class(code),
                escape_html(code),
                escape_html(&response.description)
            );
        }
    }

    body.push_str("</div>\n");
}
