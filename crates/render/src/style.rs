//! Per-variant stylesheets. Presentation constants, not configurable.

/// Shared base: typography, headings, code blocks.
pub const BASE_CSS: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; margin: 0; padding: 20px; }\
h1, h2, h3, h4 { color: #333; margin-top: 20px; margin-bottom: 10px; }\
h1 { font-size: 24px; border-bottom: 2px solid #eee; padding-bottom: 10px; }\
h2 { font-size: 20px; border-bottom: 1px solid #eee; padding-bottom: 5px; }\
h3 { font-size: 18px; }\
pre { background-color: #f5f5f5; padding: 10px; border-radius: 5px; overflow-x: auto; font-size: 12px; }";

/// Method badge palette: fixed colors for GET/POST/PUT/DELETE, a neutral
/// grey for anything else.
pub const BADGE_CSS: &str = "\
.method { display: inline-block; padding: 4px 8px; border-radius: 4px; font-weight: bold; font-size: 12px; margin-right: 10px; }\
.method.get { background-color: #d4edda; color: #155724; }\
.method.post { background-color: #cce5ff; color: #004085; }\
.method.put { background-color: #fff3cd; color: #856404; }\
.method.delete { background-color: #f8d7da; color: #721c24; }\
.method.other { background-color: #e2e3e5; color: #383d41; }";

/// Markdown page additions: inline code, blockquotes, tables, lists.
pub const MARKDOWN_CSS: &str = "\
p { margin-bottom: 10px; }\
code { background-color: #f5f5f5; padding: 2px 4px; border-radius: 3px; font-family: monospace; }\
blockquote { border-left: 4px solid #ddd; margin: 0; padding-left: 15px; color: #666; }\
table { border-collapse: collapse; width: 100%; margin: 10px 0; }\
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\
th { background-color: #f5f5f5; }\
ul, ol { margin-bottom: 10px; }\
li { margin-bottom: 5px; }";

/// Postman page additions: request blocks, url chips, header rows.
pub const POSTMAN_CSS: &str = "\
.request { border: 1px solid #ddd; margin: 10px 0; padding: 15px; border-radius: 5px; }\
.url { font-family: monospace; background-color: #f5f5f5; padding: 5px; border-radius: 3px; }\
.section { margin-bottom: 20px; }\
.header-item { margin: 5px 0; font-size: 14px; }";

/// OpenAPI page additions: endpoint blocks, parameter tables, status colors,
/// server chips.
pub const OPENAPI_CSS: &str = "\
.endpoint { border: 1px solid #ddd; margin: 10px 0; padding: 15px; border-radius: 5px; }\
.path { font-family: monospace; background-color: #f5f5f5; padding: 5px; border-radius: 3px; }\
.section { margin-bottom: 15px; }\
table { border-collapse: collapse; width: 100%; margin: 10px 0; }\
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; font-size: 12px; }\
th { background-color: #f5f5f5; }\
.server { background-color: #f5f5f5; padding: 10px; border-radius: 5px; margin: 5px 0; }\
.status { font-weight: bold; }\
.status.success { color: #155724; }\
.status.error { color: #721c24; }\
.status.neutral { color: #383d41; }";

/// Generic page additions: one bordered block per top-level field.
pub const GENERIC_CSS: &str = "\
.section { border: 1px solid #ddd; margin: 10px 0; padding: 15px; border-radius: 5px; }";
