//! Single-step lookups and edits on plain JSON values.
//!
//! These are the primitives the navigator is built on. They report failure as
//! `None` / `Err` and leave the decision of what a miss means to the caller.

use serde_json::Value;

use crate::error::{CursorError, Result};
use crate::step::Step;

/// Name of the JSON type of `val`, for error messages.
pub fn type_name(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Get the child of `val` selected by `step`.
pub fn get<'a>(val: &'a Value, step: &Step) -> Option<&'a Value> {
    match (val, step) {
        (Value::Object(map), Step::Key(key)) => map.get(key),
        (Value::Array(arr), Step::Index(_)) => arr.get(step.position(arr.len())?),
        _ => None,
    }
}

/// Get a mutable reference to the child of `val` selected by `step`.
pub fn get_mut<'a>(val: &'a mut Value, step: &Step) -> Option<&'a mut Value> {
    match (val, step) {
        (Value::Object(map), Step::Key(key)) => map.get_mut(key),
        (Value::Array(arr), Step::Index(_)) => {
            let pos = step.position(arr.len())?;
            arr.get_mut(pos)
        }
        _ => None,
    }
}

/// Store `new` at `step` inside `val`.
///
/// Objects accept any key. Arrays accept an index of an existing element;
/// anything past the end is a missing key.
pub fn set(val: &mut Value, step: &Step, new: Value) -> Result<()> {
    match (val, step) {
        (Value::Object(map), Step::Key(key)) => {
            map.insert(key.clone(), new);
            Ok(())
        }
        (Value::Array(arr), Step::Index(_)) => {
            let pos = step
                .position(arr.len())
                .ok_or_else(|| CursorError::KeyNotFound(step.clone()))?;
            arr[pos] = new;
            Ok(())
        }
        (val, step) => Err(mismatch(val, step)),
    }
}

/// Remove the child selected by `step` from `val` and return it.
///
/// Object members keep the relative order of the remaining keys.
pub fn remove(val: &mut Value, step: &Step) -> Result<Value> {
    match (val, step) {
        (Value::Object(map), Step::Key(key)) => map
            .shift_remove(key)
            .ok_or_else(|| CursorError::KeyNotFound(step.clone())),
        (Value::Array(arr), Step::Index(_)) => {
            let pos = step
                .position(arr.len())
                .ok_or_else(|| CursorError::KeyNotFound(step.clone()))?;
            Ok(arr.remove(pos))
        }
        (val, step) => Err(mismatch(val, step)),
    }
}

fn mismatch(val: &Value, step: &Step) -> CursorError {
    CursorError::Type {
        expected: if step.is_key() { "object" } else { "array" },
        found: type_name(val),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_object_key() {
        let doc = json!({"foo": "bar"});
        assert_eq!(get(&doc, &Step::from("foo")), Some(&json!("bar")));
        assert_eq!(get(&doc, &Step::from("missing")), None);
    }

    #[test]
    fn test_get_array_element() {
        let doc = json!([1, 2, 3]);
        assert_eq!(get(&doc, &Step::from(0)), Some(&json!(1)));
        assert_eq!(get(&doc, &Step::from(-1)), Some(&json!(3)));
        assert_eq!(get(&doc, &Step::from(3)), None);
    }

    #[test]
    fn test_get_mismatched_step() {
        assert_eq!(get(&json!([1, 2, 3]), &Step::from("0")), None);
        assert_eq!(get(&json!({"0": 1}), &Step::from(0)), None);
        assert_eq!(get(&json!("xyz"), &Step::from(0)), None);
        assert_eq!(get(&json!(null), &Step::from("a")), None);
    }

    #[test]
    fn test_get_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(get(&doc, &Step::from("foo")), Some(&Value::Null));
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut doc = json!({"a": [1, 2]});
        *get_mut(&mut doc, &Step::from("a")).unwrap() = json!("x");
        assert_eq!(doc, json!({"a": "x"}));
    }

    #[test]
    fn test_set() {
        let mut doc = json!({"a": 1});
        set(&mut doc, &Step::from("b"), json!(2)).unwrap();
        assert_eq!(doc, json!({"a": 1, "b": 2}));

        let mut arr = json!([1, 2, 3]);
        set(&mut arr, &Step::from(-1), json!(30)).unwrap();
        assert_eq!(arr, json!([1, 2, 30]));

        let err = set(&mut arr, &Step::from(3), json!(4)).unwrap_err();
        assert!(err.is_not_found());

        let err = set(&mut json!("abc"), &Step::from(0), json!(4)).unwrap_err();
        assert!(matches!(
            err,
            CursorError::Type {
                expected: "array",
                found: "string"
            }
        ));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        assert_eq!(remove(&mut doc, &Step::from("a")).unwrap(), json!(1));
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "c"]);

        let err = remove(&mut doc, &Step::from("a")).unwrap_err();
        assert_eq!(err.step(), Some(&Step::from("a")));
    }

    #[test]
    fn test_remove_array_element() {
        let mut arr = json!([1, 2, 3]);
        assert_eq!(remove(&mut arr, &Step::from(1)).unwrap(), json!(2));
        assert_eq!(arr, json!([1, 3]));
        assert!(remove(&mut arr, &Step::from(5)).unwrap_err().is_not_found());
    }
}
