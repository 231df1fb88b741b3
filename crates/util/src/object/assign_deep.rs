use serde_json::{Map, Value};

use super::copy::copy;
use super::shape::Shape;

#[derive(Debug, Clone, Copy, Default)]
struct MergePolicy {
    /// Only overwrite keys (or indices) the target already owns.
    exists_only: bool,
    /// Merge nested sequences by index instead of replacing them.
    by_index: bool,
}

/// Deep-merge every source into `target`.
///
/// Nested records are merged key by key. A sequence in a source replaces the
/// target's value wholesale. Every other source value is deep-copied over the
/// target's. Sources whose shape does not match the target (a sequence into a
/// record, or any scalar) are skipped.
///
/// # Examples
///
/// ```
/// use handy_util::object::assign_deep;
/// use serde_json::json;
///
/// let mut target = json!({"a": 1, "b": {"x": 1, "y": "2"}});
/// assign_deep(&mut target, [&json!({"b": {"x": "k"}})]);
/// assert_eq!(target, json!({"a": 1, "b": {"x": "k", "y": "2"}}));
///
/// let mut target = json!({"a": [1, 2]});
/// assign_deep(&mut target, [&json!({"a": ["k"]})]);
/// assert_eq!(target, json!({"a": ["k"]}));
/// ```
pub fn assign_deep<'a, 's, I>(target: &'a mut Value, sources: I) -> &'a mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    merge_all(target, sources, MergePolicy::default())
}

/// Deep-merge like [`assign_deep`], but never introduce keys the target does
/// not already own.
///
/// # Examples
///
/// ```
/// use handy_util::object::assign_deep_exists;
/// use serde_json::json;
///
/// let mut target = json!({"a": 1, "b": {"x": 1}});
/// assign_deep_exists(&mut target, [&json!({"a": 2, "b": {"x": 3, "y": 4}, "c": 5})]);
/// assert_eq!(target, json!({"a": 2, "b": {"x": 3}}));
/// ```
pub fn assign_deep_exists<'a, 's, I>(target: &'a mut Value, sources: I) -> &'a mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    let policy = MergePolicy {
        exists_only: true,
        ..MergePolicy::default()
    };
    merge_all(target, sources, policy)
}

/// Deep-merge like [`assign_deep`], but merge sequences position by position
/// instead of replacing them.
///
/// # Examples
///
/// ```
/// use handy_util::object::assign_deep_with_array;
/// use serde_json::json;
///
/// let mut target = json!({"a": [1, 2]});
/// assign_deep_with_array(&mut target, [&json!({"a": ["k"]})]);
/// assert_eq!(target, json!({"a": ["k", 2]}));
/// ```
pub fn assign_deep_with_array<'a, 's, I>(target: &'a mut Value, sources: I) -> &'a mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    let policy = MergePolicy {
        by_index: true,
        ..MergePolicy::default()
    };
    merge_all(target, sources, policy)
}

fn merge_all<'a, 's, I>(target: &'a mut Value, sources: I, policy: MergePolicy) -> &'a mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    for source in sources {
        merge(target, source, policy);
    }
    target
}

fn merge(target: &mut Value, source: &Value, policy: MergePolicy) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => merge_records(target, source, policy),
        (Value::Array(target), Value::Array(source)) => merge_sequences(target, source, policy),
        (target, source) => tracing::trace!(
            target_shape = ?Shape::of(target),
            source_shape = ?Shape::of(source),
            "skipping deep-merge source of mismatched shape"
        ),
    }
}

fn merge_records(target: &mut Map<String, Value>, source: &Map<String, Value>, policy: MergePolicy) {
    for (key, incoming) in source {
        if policy.exists_only && !target.contains_key(key) {
            continue;
        }
        match target.get_mut(key) {
            Some(slot) => assign_slot(slot, incoming, policy),
            None => {
                target.insert(key.clone(), copy(incoming));
            }
        }
    }
}

fn merge_sequences(target: &mut Vec<Value>, source: &[Value], policy: MergePolicy) {
    for (index, incoming) in source.iter().enumerate() {
        match target.get_mut(index) {
            Some(slot) => assign_slot(slot, incoming, policy),
            None if policy.exists_only => break,
            None => target.push(copy(incoming)),
        }
    }
}

fn assign_slot(slot: &mut Value, incoming: &Value, policy: MergePolicy) {
    match (Shape::of(slot), Shape::of(incoming)) {
        (Shape::Record, Shape::Record) => merge(slot, incoming, policy),
        (Shape::Sequence, Shape::Sequence) if policy.by_index => merge(slot, incoming, policy),
        _ => *slot = copy(incoming),
    }
}
