use serde_json::Value;

/// Check whether a value is `null` or an object-like value without own keys.
///
/// Records and sequences count as object-like, so `{}` and `[]` are empty
/// while `{"a": 1}` and `[0]` are not. `null` is empty. Every other scalar
/// (including `""` and `0`) is not object-like and reports `false`.
///
/// # Examples
///
/// ```
/// use handy_util::object::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!({})));
/// assert!(is_empty(&json!(null)));
/// assert!(!is_empty(&json!({"foo": "bar"})));
/// assert!(!is_empty(&json!("")));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_record() {
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({"foo": "bar"})));
        assert!(!is_empty(&json!({"foo": null})));
    }

    #[test]
    fn test_is_empty_sequence() {
        assert!(is_empty(&json!([])));
        assert!(!is_empty(&json!([null])));
    }

    #[test]
    fn test_is_empty_null() {
        assert!(is_empty(&json!(null)));
    }

    #[test]
    fn test_is_empty_scalars() {
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!("")));
        assert!(!is_empty(&json!("string")));
    }
}
