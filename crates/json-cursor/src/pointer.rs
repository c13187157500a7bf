//! JSON Pointer (RFC 6901) parsing for multi-step navigation.

use serde_json::Value;

use crate::step::Step;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Parse a JSON Pointer string into path components.
///
/// The leading `/` is optional: `a/b` and `/a/b` both yield `["a", "b"]`.
/// The empty pointer yields no components.
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let rest = pointer.strip_prefix('/').unwrap_or(pointer);
    rest.split('/').map(unescape_component).collect()
}

/// Check if a string represents a valid non-negative integer array index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Turn a pointer component into a step for the container it is applied to.
///
/// Arrays take canonical decimal indices; everything else takes the component
/// as a key, so a non-index component against an array misses.
pub fn component_step(container: &Value, component: &str) -> Step {
    if container.is_array() && is_valid_index(component) {
        if let Ok(index) = component.parse::<isize>() {
            return Step::Index(index);
        }
    }
    Step::Key(component.to_string())
}
