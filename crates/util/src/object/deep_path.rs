use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    EmptyPath,
    #[error("value at key {key:?} cannot hold properties")]
    NotAContainer { key: String },
    #[error("key {key:?} is not an array index")]
    InvalidIndex { key: String },
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Parse a canonical array index: `"0"`, `"1"`, `"42"`, but not `"01"` or `"+1"`.
pub(crate) fn array_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => items.get(array_index(key)?),
        _ => None,
    }
}

/// Get the value found after following several keys.
///
/// Returns `None` as soon as any step is missing or `null`; never panics.
/// Sequence steps take decimal indices.
///
/// # Examples
///
/// ```
/// use handy_util::object::get_deep;
/// use serde_json::json;
///
/// let doc = json!({"k1": {"k2": [10, 20]}});
/// assert_eq!(get_deep(&doc, &["k1", "k2", "1"]), Some(&json!(20)));
/// assert_eq!(get_deep(&doc, &["k1", "nope", "k3"]), None);
/// ```
pub fn get_deep<'a, K: AsRef<str>>(value: &'a Value, keys: &[K]) -> Option<&'a Value> {
    if value.is_null() {
        return None;
    }
    let mut current = value;
    for key in keys {
        current = child(current, key.as_ref())?;
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

fn child_or_insert<'a>(value: &'a mut Value, key: &str) -> Result<&'a mut Value, PathError> {
    let slot = match value {
        Value::Object(map) => map.entry(key.to_string()).or_insert(Value::Null),
        Value::Array(items) => {
            let index = array_index(key).ok_or_else(|| PathError::InvalidIndex {
                key: key.to_string(),
            })?;
            let len = items.len();
            if index == len {
                items.push(Value::Null);
            }
            items
                .get_mut(index)
                .ok_or(PathError::IndexOutOfRange { index, len })?
        }
        _ => {
            return Err(PathError::NotAContainer {
                key: key.to_string(),
            })
        }
    };
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }
    Ok(slot)
}

fn put(value: &mut Value, key: &str, v: Value) -> Result<(), PathError> {
    match value {
        Value::Object(map) => {
            map.insert(key.to_string(), v);
            Ok(())
        }
        Value::Array(items) => {
            let index = array_index(key).ok_or_else(|| PathError::InvalidIndex {
                key: key.to_string(),
            })?;
            let len = items.len();
            if index < len {
                items[index] = v;
            } else if index == len {
                items.push(v);
            } else {
                return Err(PathError::IndexOutOfRange { index, len });
            }
            Ok(())
        }
        _ => Err(PathError::NotAContainer {
            key: key.to_string(),
        }),
    }
}

/// Set the value found after following several keys.
///
/// Every intermediate step that is missing or `null` becomes an empty record.
/// Sequences accept an index up to their length (which appends).
///
/// # Errors
///
/// - `keys` is empty
/// - a step lands on a scalar, which cannot hold properties
/// - a sequence step is not an index, or is past the end
///
/// # Examples
///
/// ```
/// use handy_util::object::set_deep;
/// use serde_json::json;
///
/// let mut obj = json!({});
/// set_deep(&mut obj, &["k1", "k2"], json!("val")).unwrap();
/// assert_eq!(obj, json!({"k1": {"k2": "val"}}));
/// ```
pub fn set_deep<K: AsRef<str>>(value: &mut Value, keys: &[K], v: Value) -> Result<(), PathError> {
    let (last, init) = keys.split_last().ok_or(PathError::EmptyPath)?;
    let mut current = value;
    for key in init {
        current = child_or_insert(current, key.as_ref())?;
    }
    put(current, last.as_ref(), v)
}
