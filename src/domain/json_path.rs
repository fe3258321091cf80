use serde_json::{Map, Value};

/// Follows `path` through nested objects. Returns `None` as soon as a key is
/// missing or an intermediate value is not an object. An empty path yields `root`.
pub fn safe_get<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |current, key| current.as_object()?.get(*key))
}

/// Like [`safe_get`] but for string leaves. Absent or non-string values become `""`.
pub fn safe_get_str<'a>(root: &'a Value, path: &[&str]) -> &'a str {
    safe_get(root, path).and_then(Value::as_str).unwrap_or("")
}

pub fn safe_get_f64(root: &Value, path: &[&str]) -> Option<f64> {
    safe_get(root, path).and_then(Value::as_f64)
}

pub fn safe_get_bool(root: &Value, path: &[&str]) -> Option<bool> {
    safe_get(root, path).and_then(Value::as_bool)
}

pub fn safe_get_array<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    safe_get(root, path).and_then(Value::as_array)
}

pub fn safe_get_object<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Map<String, Value>> {
    safe_get(root, path).and_then(Value::as_object)
}

/// Optional string leaf: `None` when absent, mistyped or empty.
pub fn safe_get_opt_str(root: &Value, path: &[&str]) -> Option<String> {
    match safe_get_str(root, path) {
        "" => None,
        s => Some(s.to_string()),
    }
}

/// JSON numbers are read as `f64` and truncated toward zero.
pub fn safe_get_i64(root: &Value, path: &[&str]) -> Option<i64> {
    safe_get_f64(root, path).map(|n| n.trunc() as i64)
}
