//! Generic fallback parser: the last cascade tier, always matches.

use indexmap::IndexMap;
use serde_json::Value;

use crate::model::GenericDoc;

/// Terminal cascade predicate.
pub fn always(_value: &Value) -> bool {
    true
}

/// Pass the decoded value through as an ordered key → value mapping. A
/// non-object top level (array or scalar) is stored under the single key
/// `"document"` so the renderer's field-block layout stays total.
pub fn from_value(value: &Value) -> GenericDoc {
    let fields: IndexMap<String, Value> = match value.as_object() {
        Some(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        None => {
            let mut fields = IndexMap::new();
            fields.insert("document".to_owned(), value.clone());
            fields
        }
    };
    GenericDoc { fields }
}
