use serde_json::Value;

/// Coarse classification of a dynamic value.
///
/// Deep merging decides once per slot whether both sides are records,
/// both are sequences, or anything else, and dispatches on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Null, booleans, numbers and strings.
    Scalar,
    /// JSON arrays.
    Sequence,
    /// JSON objects (plain key-value records).
    Record,
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => Shape::Sequence,
            Value::Object(_) => Shape::Record,
            _ => Shape::Scalar,
        }
    }
}

/// Check whether a value is a plain key-value record.
///
/// # Examples
///
/// ```
/// use handy_util::object::is_plain;
/// use serde_json::json;
///
/// assert!(is_plain(&json!({"k": 1})));
/// assert!(is_plain(&json!({"k": {"k2": 1}})));
/// assert!(!is_plain(&json!([])));
/// assert!(!is_plain(&json!(null)));
/// ```
pub fn is_plain(value: &Value) -> bool {
    Shape::of(value) == Shape::Record
}
