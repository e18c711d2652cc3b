//! JSON output for glTF documents.
//!
//! Records are first lowered to a [`serde_json::Value`] tree, every `null`
//! member is dropped at any depth, and the pruned tree is encoded. Key order
//! follows field declaration order (`preserve_order`).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

use super::types::GltfDocument;

/// Remove every `null` object member, recursively.
///
/// Arrays are descended into but `null` array elements are kept, since
/// positional meaning would otherwise shift.
pub fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                prune_nulls(v);
            }
        }
        Value::Array(items) => {
            for v in items {
                prune_nulls(v);
            }
        }
        _ => {}
    }
}

/// Lower any serializable record to a pruned JSON tree.
///
/// # Errors
/// Returns [`Error::JsonError`](crate::Error::JsonError) if `record` cannot be
/// represented as JSON, e.g. a map with non-string keys.
pub fn to_pruned_value<T: Serialize>(record: &T) -> Result<Value> {
    let mut value = serde_json::to_value(record)?;
    prune_nulls(&mut value);
    Ok(value)
}

impl GltfDocument {
    /// Serialize to compact JSON with absent fields omitted.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&to_pruned_value(self)?)?)
    }

    /// Serialize to indented JSON with absent fields omitted.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&to_pruned_value(self)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::gltf::types::{GltfMesh, GltfPrimitive};

    #[test]
    fn test_prune_nested_nulls() {
        let mut value = json!({
            "a": null,
            "b": { "c": null, "d": 1, "e": { "f": null } },
            "g": [ { "h": null, "i": 2 }, null ],
        });
        prune_nulls(&mut value);
        assert_eq!(value, json!({
            "b": { "d": 1, "e": {} },
            "g": [ { "i": 2 }, null ],
        }));
    }

    #[test]
    fn test_absent_fields_dropped_inside_arrays() {
        let mesh = GltfMesh {
            primitives: vec![GltfPrimitive::triangles(1, None)],
            name: None,
        };
        let value = to_pruned_value(&mesh).unwrap();
        assert_eq!(value, json!({
            "primitives": [ { "attributes": { "POSITION": 1 }, "mode": 4 } ],
        }));
    }

    #[test]
    fn test_key_order_follows_declaration() {
        let mesh = GltfMesh {
            primitives: vec![GltfPrimitive::triangles(1, Some(0))],
            name: Some("Triangle".to_string()),
        };
        let json = serde_json::to_string(&to_pruned_value(&mesh).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"primitives":[{"attributes":{"POSITION":1},"indices":0,"mode":4}],"name":"Triangle"}"#
        );
    }

    #[test]
    fn test_non_string_keys_are_an_error() {
        let record: std::collections::BTreeMap<(u8, u8), u8> = [((0, 1), 2)].into_iter().collect();
        assert!(matches!(
            to_pruned_value(&record),
            Err(crate::error::Error::JsonError(_))
        ));
    }
}
