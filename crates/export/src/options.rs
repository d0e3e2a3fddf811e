use serde::{Deserialize, Serialize};

/// Fixed layout options sent to the PDF engine alongside the markup.
///
/// These mirror the house style for exported documentation: A4 portrait,
/// uniform 20px margins, a banner header and a generation-date footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PdfOptions {
    pub format: String,
    pub margin: PdfMargins,
    pub display_header_footer: bool,
    pub header_template: String,
    pub footer_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PdfMargins {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

const PAGE_FORMAT: &str = "A4";
const PAGE_MARGIN: &str = "20px";
const HEADER_TITLE: &str = "API Documentation";

impl PdfOptions {
    /// The standard export layout. The footer stamps the current date so
    /// readers can tell stale exports apart.
    pub fn standard() -> Self {
        let today = chrono::Local::now().format("%Y-%m-%d");
        PdfOptions {
            format: PAGE_FORMAT.to_owned(),
            margin: PdfMargins {
                top: PAGE_MARGIN.to_owned(),
                right: PAGE_MARGIN.to_owned(),
                bottom: PAGE_MARGIN.to_owned(),
                left: PAGE_MARGIN.to_owned(),
            },
            display_header_footer: true,
            header_template: format!(
                "<div style=\"font-size:10px; width:100%; height:45px; text-align:center; \
                 padding-top:10px; border-bottom:1px solid #ddd;\">{HEADER_TITLE}</div>"
            ),
            footer_template: format!(
                "<div style=\"font-size:9px; width:100%; height:28px; text-align:center; \
                 color:#888;\">Generated on {today}</div>"
            ),
        }
    }
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_options_use_a4_and_uniform_margins() {
        let opts = PdfOptions::standard();
        assert_eq!(opts.format, "A4");
        assert_eq!(opts.margin.top, "20px");
        assert_eq!(opts.margin.right, "20px");
        assert_eq!(opts.margin.bottom, "20px");
        assert_eq!(opts.margin.left, "20px");
        assert!(opts.display_header_footer);
    }

    #[test]
    fn header_and_footer_templates_carry_banner_and_date() {
        let opts = PdfOptions::standard();
        assert!(opts.header_template.contains("API Documentation"));
        assert!(opts.footer_template.contains("Generated on "));
    }

    #[test]
    fn options_serialize_camel_case() {
        let wire = serde_json::to_value(PdfOptions::standard()).unwrap();
        assert!(wire.get("displayHeaderFooter").is_some());
        assert!(wire.get("headerTemplate").is_some());
        assert!(wire.get("footerTemplate").is_some());
        assert_eq!(wire["margin"]["top"], "20px");
    }
}
