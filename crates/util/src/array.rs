//! Sequence helpers: last element, in-place removal and order-preserving
//! deduplication.

use serde_json::Value;

/// Get the last element of a slice.
///
/// # Examples
///
/// ```
/// use handy_util::array::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Remove every element equal to `item`, in place.
///
/// Returns the index the first match had before anything was removed, or
/// `None` when nothing matched (the vector is then left untouched).
///
/// # Examples
///
/// ```
/// use handy_util::array::remove_of;
///
/// let mut v = vec![1, 2, 3, 2];
/// assert_eq!(remove_of(&mut v, &2), Some(1));
/// assert_eq!(v, vec![1, 3]);
/// assert_eq!(remove_of(&mut v, &9), None);
/// ```
pub fn remove_of<T: PartialEq>(items: &mut Vec<T>, item: &T) -> Option<usize> {
    let first = items.iter().position(|x| x == item)?;
    items.retain(|x| x != item);
    Some(first)
}

/// Create a copy of `items` keeping only the first occurrence of each value.
///
/// Values only need `PartialEq`, so each one is checked against those already
/// kept (quadratic in the number of distinct values).
///
/// # Examples
///
/// ```
/// use handy_util::array::uniq;
///
/// assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut ret: Vec<T> = Vec::new();
    for item in items {
        if !ret.contains(item) {
            ret.push(item.clone());
        }
    }
    ret
}

/// Create a copy of `items` keeping the first element for each distinct key.
///
/// Insertion order is preserved. Keys only need `PartialEq` and are compared
/// against every key seen so far.
pub fn uniq_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut seen: Vec<K> = Vec::new();
    let mut ret = Vec::new();
    for item in items {
        let k = key(item);
        if !seen.contains(&k) {
            seen.push(k);
            ret.push(item.clone());
        }
    }
    ret
}

/// Deduplicate records by the value stored under `key`.
///
/// Elements that lack `key` (including non-object elements) all share one
/// "absent" key, so the first of them is kept and the rest are dropped.
///
/// # Examples
///
/// ```
/// use handy_util::array::uniq_by;
/// use serde_json::json;
///
/// let items = vec![json!({"a": "110"}), json!({"a": "111"}), json!({"a": "113"}), json!({"a": "111"})];
/// assert_eq!(uniq_by(&items, "a"), items[..3].to_vec());
/// ```
pub fn uniq_by(items: &[Value], key: &str) -> Vec<Value> {
    uniq_by_key(items, |item| item.get(key).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last() {
        assert_eq!(last(&["a", "b"]), Some(&"b"));
        assert_eq!(last::<u8>(&[]), None);
    }

    #[test]
    fn test_remove_of_removes_all_matches() {
        let mut v = vec![1, 2, 3, 2];
        assert_eq!(remove_of(&mut v, &2), Some(1));
        assert_eq!(v, vec![1, 3]);
    }

    #[test]
    fn test_remove_of_adjacent_matches() {
        let mut v = vec![2, 2, 2];
        assert_eq!(remove_of(&mut v, &2), Some(0));
        assert!(v.is_empty());
    }

    #[test]
    fn test_remove_of_missing() {
        let mut v = vec![1, 3];
        assert_eq!(remove_of(&mut v, &5), None);
        assert_eq!(v, vec![1, 3]);
    }

    #[test]
    fn test_uniq() {
        assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
        assert_eq!(uniq::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(uniq(&["b", "a", "b"]), vec!["b", "a"]);
    }

    #[test]
    fn test_uniq_partial_eq_only() {
        assert_eq!(uniq(&[1.0, 0.5, 1.0, 0.5]), vec![1.0, 0.5]);
    }

    #[test]
    fn test_uniq_values() {
        let items = vec![json!(1), json!("1"), json!(1), json!(null), json!(null)];
        assert_eq!(uniq(&items), vec![json!(1), json!("1"), json!(null)]);
    }

    #[test]
    fn test_uniq_by() {
        let items = vec![
            json!({"a": "110"}),
            json!({"a": "111"}),
            json!({"a": "113"}),
            json!({"a": "111"}),
        ];
        assert_eq!(uniq_by(&items, "a"), items[..3].to_vec());
    }

    #[test]
    fn test_uniq_by_missing_key_passes_once() {
        let items = vec![json!({"b": 1}), json!({"a": 1}), json!({"b": 2}), json!(3)];
        assert_eq!(uniq_by(&items, "a"), vec![json!({"b": 1}), json!({"a": 1})]);
    }

    #[test]
    fn test_uniq_by_null_differs_from_absent() {
        let items = vec![json!({"a": null}), json!({}), json!({"a": null})];
        assert_eq!(uniq_by(&items, "a"), vec![json!({"a": null}), json!({})]);
    }

    #[test]
    fn test_uniq_by_key() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let firsts = uniq_by_key(&words, |w| w.chars().next());
        assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
    }
}
