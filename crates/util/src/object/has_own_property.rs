use serde_json::Value;

use super::deep_path::array_index;

/// Check if a value has an own property with the given key.
///
/// Records answer for their keys, sequences for their in-range indices.
/// Scalars have no own properties.
///
/// # Examples
///
/// ```
/// use handy_util::object::has_own_property;
/// use serde_json::json;
///
/// assert!(has_own_property(&json!({"foo": null}), "foo"));
/// assert!(has_own_property(&json!(["a", "b"]), "1"));
/// assert!(!has_own_property(&json!(["a", "b"]), "2"));
/// assert!(!has_own_property(&json!("string"), "0"));
/// ```
pub fn has_own_property(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key),
        Value::Array(items) => array_index(key).is_some_and(|index| index < items.len()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_own_property_record() {
        let obj = json!({"foo": "bar", "baz": 42});

        assert!(has_own_property(&obj, "foo"));
        assert!(has_own_property(&obj, "baz"));
        assert!(!has_own_property(&obj, "qux"));
    }

    #[test]
    fn test_has_own_property_sequence() {
        let arr = json!([1, 2, 3]);

        assert!(has_own_property(&arr, "0"));
        assert!(has_own_property(&arr, "2"));
        assert!(!has_own_property(&arr, "3"));
        assert!(!has_own_property(&arr, "length"));
        assert!(!has_own_property(&arr, "01"));
    }

    #[test]
    fn test_has_own_property_scalar() {
        assert!(!has_own_property(&json!(null), "foo"));
        assert!(!has_own_property(&json!(42), "foo"));
    }
}
