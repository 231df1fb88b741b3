use serde_json::{Map, Value};

/// Shortest round-trip form, switching to an exponent outside
/// `[1e-6, 1e21)` with an explicit sign (`1e+21`, `1.5e-7`).
fn float_to_js_string(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", f);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Render a value the way it reads when used as a record key.
///
/// Strings are taken as-is, numbers use their shortest form (`1.0` reads as
/// `"1"`, `1e21` as `"1e+21"`, `1e-7` as `"1e-7"`), sequences join their elements with `,` (null elements read
/// as empty), and records read as `"[object Object]"`.
///
/// # Examples
///
/// ```
/// use handy_util::object::to_js_string;
/// use serde_json::json;
///
/// assert_eq!(to_js_string(&json!("a")), "a");
/// assert_eq!(to_js_string(&json!(2.0)), "2");
/// assert_eq!(to_js_string(&json!([1, null, "x"])), "1,,x");
/// ```
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                float_to_js_string(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Create a copy with keys and values swapped.
///
/// Values are stringified with [`to_js_string`]. When two keys share a value,
/// the later key wins.
///
/// # Examples
///
/// ```
/// use handy_util::object::invert;
/// use serde_json::json;
///
/// let obj = json!({"x": "a", "y": "b", "z": "a"});
/// let inverted = invert(obj.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(inverted), json!({"a": "z", "b": "y"}));
/// ```
pub fn invert(obj: &Map<String, Value>) -> Map<String, Value> {
    invert_by(obj, |value, _| to_js_string(value))
}

/// Create a copy with keys and values swapped, naming each new key with `f`.
///
/// `f` receives the original value and the original key.
///
/// # Examples
///
/// ```
/// use handy_util::object::{invert_by, to_js_string};
/// use serde_json::json;
///
/// let obj = json!({"x": "a", "y": "b"});
/// let inverted = invert_by(obj.as_object().unwrap(), |v, _| format!("new_{}", to_js_string(v)));
/// assert_eq!(serde_json::Value::Object(inverted), json!({"new_a": "x", "new_b": "y"}));
/// ```
pub fn invert_by<F>(obj: &Map<String, Value>, mut f: F) -> Map<String, Value>
where
    F: FnMut(&Value, &str) -> String,
{
    let mut duplicate = Map::new();
    for (key, value) in obj {
        duplicate.insert(f(value, key), Value::String(key.clone()));
    }
    duplicate
}
