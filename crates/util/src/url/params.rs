use serde_json::{Map, Value};

use super::uri_component::{decode_uri_component, encode_uri_component};
use crate::object::to_js_string;

fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) | Value::Null => value.to_string(),
        other => to_js_string(other),
    }
}

/// Append `params` to `url` as query parameters.
///
/// Values are percent-encoded; records, sequences and `null` are serialized as
/// JSON first. Keys are written as given. `?` starts the query unless `url`
/// already has one, in which case parameters are joined with `&`.
///
/// Query values carry no type, so booleans and numbers come back as strings
/// from [`get_url_params`]; pass them as strings in the first place.
///
/// # Examples
///
/// ```
/// use handy_util::url::computed_url_params;
/// use serde_json::json;
///
/// let params = json!({"from": "home/more"});
/// assert_eq!(
///     computed_url_params("http://localhost:9082", params.as_object().unwrap()),
///     "http://localhost:9082?from=home%2Fmore"
/// );
/// ```
pub fn computed_url_params(url: &str, params: &Map<String, Value>) -> String {
    let mut params_str = String::new();
    for (key, value) in params {
        if !params_str.is_empty() {
            params_str.push('&');
        }
        params_str.push_str(key);
        params_str.push('=');
        params_str.push_str(&encode_uri_component(&param_text(value)));
    }
    if params_str.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{params_str}")
}

/// Parse the query string of `url` (between the first `?` and the next `#`).
///
/// Every value is percent-decoded, then kept as parsed JSON if it parses to a
/// record, a sequence or `null`; otherwise it stays a string (so `"1"` and
/// `"true"` remain strings). A value that fails to decode is kept raw. A
/// parameter without `=` maps to `""`; empty segments are ignored.
///
/// There is no "current page" default: callers that want one pass their own
/// current URL.
///
/// # Examples
///
/// ```
/// use handy_util::url::get_url_params;
/// use serde_json::json;
///
/// let params = get_url_params("http://h/p?a=1&o=%7B%22k%22%3A2%7D#top");
/// assert_eq!(params.get("a"), Some(&json!("1")));
/// assert_eq!(params.get("o"), Some(&json!({"k": 2})));
/// ```
pub fn get_url_params(url: &str) -> Map<String, Value> {
    let mut params = Map::new();
    let Some(start) = url.find('?') else {
        return params;
    };
    let rest = &url[start + 1..];
    let query = rest.find('#').map_or(rest, |end| &rest[..end]);

    for item in query.split('&').filter(|item| !item.is_empty()) {
        let mut parts = item.split('=');
        let key = parts.next().unwrap_or_default();
        let raw = parts.next().unwrap_or_default();
        let decoded = match decode_uri_component(raw) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::debug!(%key, %raw, error = %err, "keeping undecodable query value as-is");
                raw.to_string()
            }
        };
        let value = match serde_json::from_str::<Value>(&decoded) {
            Ok(parsed @ (Value::Object(_) | Value::Array(_) | Value::Null)) => parsed,
            _ => Value::String(decoded),
        };
        params.insert(key.to_string(), value);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_computed_url_params_separator() {
        let params = record(json!({"a": "1", "b": "x y"}));
        assert_eq!(computed_url_params("http://h", &params), "http://h?a=1&b=x%20y");
        assert_eq!(computed_url_params("http://h?z=0", &params), "http://h?z=0&a=1&b=x%20y");
    }

    #[test]
    fn test_computed_url_params_empty() {
        assert_eq!(computed_url_params("http://h", &Map::new()), "http://h");
        assert_eq!(computed_url_params("", &record(json!({"a": "b"}))), "?a=b");
    }

    #[test]
    fn test_computed_url_params_serializes_structures() {
        let params = record(json!({"o": {"k": 1}, "l": [1], "n": null, "b": true, "i": 7}));
        assert_eq!(
            computed_url_params("u", &params),
            "u?o=%7B%22k%22%3A1%7D&l=%5B1%5D&n=null&b=true&i=7"
        );
    }

    #[test]
    fn test_get_url_params_none() {
        assert!(get_url_params("http://h/path").is_empty());
        assert!(get_url_params("http://h/path?").is_empty());
    }

    #[test]
    fn test_get_url_params_scalars_stay_strings() {
        let params = get_url_params("?n=1&t=true&s=%22q%22&e=");
        assert_eq!(Value::Object(params), json!({"n": "1", "t": "true", "s": "\"q\"", "e": ""}));
    }

    #[test]
    fn test_get_url_params_structures_parse() {
        let params = get_url_params("?l=%5B1%2C2%5D&z=null");
        assert_eq!(params.get("l"), Some(&json!([1, 2])));
        assert_eq!(params.get("z"), Some(&json!(null)));
    }

    #[test]
    fn test_get_url_params_missing_value_and_fragment() {
        let params = get_url_params("http://h?flag&a=b=c#x=1");
        assert_eq!(params.get("flag"), Some(&json!("")));
        assert_eq!(params.get("a"), Some(&json!("b")));
        assert_eq!(params.get("x"), None);
    }

    #[test]
    fn test_get_url_params_malformed_kept_raw() {
        let params = get_url_params("?p=100%&q=%E4");
        assert_eq!(params.get("p"), Some(&json!("100%")));
        assert_eq!(params.get("q"), Some(&json!("%E4")));
    }

    #[test]
    fn test_get_url_params_later_duplicate_wins() {
        let params = get_url_params("?a=1&a=2");
        assert_eq!(params.get("a"), Some(&json!("2")));
    }
}
