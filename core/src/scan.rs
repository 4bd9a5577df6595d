//! `$ref` discovery.
//!
//! Only local definition references of the exact form `#/definitions/<name>`
//! are collected; every other `$ref` shape is ignored.
//!
//! Arrays are not descended into. A `$ref` that only appears inside an array
//! element (for example under `oneOf` or `items: [...]`) is not discovered.
//! Schemas in this system place `$ref` in object-valued positions only.

use serde_json::{Map, Value};

use crate::pool::DEFINITIONS_KEY;

/// Definition names in discovery order. Duplicates are kept.
pub type ReferenceSet = Vec<String>;

const REF_KEY: &str = "$ref";

/// Recursively collects the definition names referenced by `document`.
///
/// Nested objects are walked; string values under a `$ref` key are parsed
/// with [`parse_local_ref`]. Never fails.
///
/// # Examples
///
/// ```
/// use schemagen_core::scan_references;
/// use serde_json::json;
///
/// let doc = json!({
///     "properties": {
///         "id": {"$ref": "#/definitions/id"},
///         "ext": {"$ref": "other.json#/definitions/id"}
///     }
/// });
/// assert_eq!(scan_references(doc.as_object().unwrap()), vec!["id"]);
/// ```
pub fn scan_references(document: &Map<String, Value>) -> ReferenceSet {
    let mut refs = Vec::new();
    collect(document, &mut refs);
    refs
}

fn collect(object: &Map<String, Value>, refs: &mut ReferenceSet) {
    for (key, value) in object {
        match value {
            Value::Object(nested) => collect(nested, refs),
            Value::String(target) if key == REF_KEY => {
                if let Some(name) = parse_local_ref(target) {
                    refs.push(name.to_string());
                }
            }
            _ => {}
        }
    }
}

/// Extracts `<name>` from a `#/definitions/<name>` reference.
///
/// The reference must split on `/` into exactly three tokens, the first two
/// being `#` and `definitions`.
///
/// ```
/// use schemagen_core::parse_local_ref;
///
/// assert_eq!(parse_local_ref("#/definitions/id"), Some("id"));
/// assert_eq!(parse_local_ref("#/defs/id"), None);
/// assert_eq!(parse_local_ref("#/definitions/id/items"), None);
/// ```
pub fn parse_local_ref(target: &str) -> Option<&str> {
    let mut tokens = target.split('/');
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some("#"), Some(DEFINITIONS_KEY), Some(name), None) => Some(name),
        _ => None,
    }
}
