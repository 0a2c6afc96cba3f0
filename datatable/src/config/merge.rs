//! Key-by-key overlay of JSON documents.

use serde_json::Value;

/// Overlay `overrides` onto `base`.
///
/// Objects merge recursively, key by key. Any other override value
/// (scalars, arrays, `null`) replaces the base value outright. Keys present
/// only in `base` are kept.
pub fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Like [`merge`], but returns a new value and leaves `base` untouched.
pub fn merged(base: &Value, overrides: Value) -> Value {
    let mut out = base.clone();
    merge(&mut out, overrides);
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_objects_merge_key_by_key() {
        let mut base = json!({ "a": { "x": 1, "y": 2 }, "b": true });
        merge(&mut base, json!({ "a": { "y": 3, "z": 4 } }));
        assert_eq!(base, json!({ "a": { "x": 1, "y": 3, "z": 4 }, "b": true }));
    }

    #[test]
    fn non_objects_replace() {
        let mut base = json!({ "list": [1, 2, 3], "n": 1 });
        merge(&mut base, json!({ "list": [9], "n": null }));
        assert_eq!(base, json!({ "list": [9], "n": null }));
    }

    #[test]
    fn object_replaces_scalar() {
        let base = json!({ "a": 1 });
        assert_eq!(merged(&base, json!({ "a": { "b": 2 } })), json!({ "a": { "b": 2 } }));
        assert_eq!(base, json!({ "a": 1 }));
    }
}
