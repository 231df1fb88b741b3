use serde_json::{Map, Value};

/// Deep copy of a value.
///
/// Sequences and records are rebuilt element by element, scalars are cloned.
///
/// # Examples
///
/// ```
/// use handy_util::object::copy;
/// use serde_json::json;
///
/// let original = json!({"foo": [1, 2, {"bar": true}]});
/// assert_eq!(copy(&original), original);
/// ```
pub fn copy(source: &Value) -> Value {
    match source {
        Value::Array(items) => Value::Array(items.iter().map(copy).collect()),
        Value::Object(map) => {
            let mut target = Map::with_capacity(map.len());
            for (key, val) in map {
                target.insert(key.clone(), copy(val));
            }
            Value::Object(target)
        }
        scalar => scalar.clone(),
    }
}
