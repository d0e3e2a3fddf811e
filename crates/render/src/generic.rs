//! Generic document layout: one bordered block per top-level field.

use std::fmt::Write;

use canonical::GenericDoc;
use serde_json::Value;

use crate::html::{escape_html, json_block, page_shell};
use crate::style::{BASE_CSS, GENERIC_CSS};

const PAGE_TITLE: &str = "Data Structure";

pub fn render_generic(doc: &GenericDoc) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>{PAGE_TITLE}</h1>\n");

    for (key, value) in &doc.fields {
        body.push_str("<div class=\"section\">\n");
        let _ = write!(body, "<h3>{}</h3>\n", escape_html(key));
        match value {
            Value::Array(items) => {
                let _ = write!(body, "<p>Array with {} items</p>\n", items.len());
                body.push_str(&json_block(value));
                body.push('\n');
            }
            Value::Object(_) => {
                body.push_str(&json_block(value));
                body.push('\n');
            }
            scalar => {
                // Scalars read better as plain text than as a JSON dump.
                let text = match scalar {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                let _ = write!(body, "<p>{}</p>\n", escape_html(&text));
            }
        }
        body.push_str("</div>\n");
    }

    let css = format!("{BASE_CSS}{GENERIC_CSS}");
    page_shell(PAGE_TITLE, &css, &body)
}
