//! Chainable navigation over JSON values.
//!
//! # Overview
//!
//! A [`Cursor`] is either [`Cursor::Found`], wrapping a value that was reached,
//! or [`Cursor::Missing`], recording the first step of the chain that could not
//! be followed. Lookups never fail: a miss turns the chain into `Missing`, and
//! a `Missing` chain ignores every further step. The failure only surfaces when
//! the chain is resolved without a fallback.
//!
//! The wrapped value may be owned ([`Document`]), shared (`Cursor<&Value>`) or
//! exclusive (`Cursor<&mut Value>`). Lookups on an owned or shared cursor hand
//! out shared cursors; `get_mut` hands out exclusive ones for editing in place.

use std::borrow::{Borrow, BorrowMut};

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::absent::Absent;
use crate::cast;
use crate::error::{CursorError, Result};
use crate::lookup;
use crate::pointer::{component_step, parse_json_pointer};
use crate::step::Step;

/// Result of navigating a JSON value.
#[derive(Debug, Clone)]
pub enum Cursor<V> {
    /// The chain reached a value.
    Found(V),
    /// The chain failed; holds the first failed step.
    Missing(Absent),
}

/// A cursor owning its root value.
pub type Document = Cursor<Value>;

fn value_of<V: Borrow<Value>>(v: &V) -> &Value {
    v.borrow()
}

fn value_of_mut<V: BorrowMut<Value>>(v: &mut V) -> &mut Value {
    v.borrow_mut()
}

fn miss<T>(step: Step) -> Cursor<T> {
    tracing::trace!(key = %step, "lookup missed");
    Cursor::Missing(Absent::new(step))
}

fn descend(val: &Value, step: Step) -> Cursor<&Value> {
    match lookup::get(val, &step) {
        Some(child) => Cursor::Found(child),
        None => miss(step),
    }
}

fn descend_mut(val: &mut Value, step: Step) -> Cursor<&mut Value> {
    match lookup::get_mut(val, &step) {
        Some(child) => Cursor::Found(child),
        None => miss(step),
    }
}

fn walk<'a>(mut current: &'a Value, pointer: &str) -> Cursor<&'a Value> {
    for component in parse_json_pointer(pointer) {
        let step = component_step(current, &component);
        match lookup::get(current, &step) {
            Some(child) => current = child,
            None => return miss(step),
        }
    }
    Cursor::Found(current)
}

fn walk_mut<'a>(mut current: &'a mut Value, pointer: &str) -> Cursor<&'a mut Value> {
    for component in parse_json_pointer(pointer) {
        let step = component_step(current, &component);
        let parent = current;
        match lookup::get_mut(parent, &step) {
            Some(child) => current = child,
            None => return miss(step),
        }
    }
    Cursor::Found(current)
}

impl<V> Cursor<V> {
    /// Wrap a value that is known to exist.
    pub fn new(value: V) -> Self {
        Cursor::Found(value)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Cursor::Found(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cursor::Missing(_))
    }

    /// The first failed step of a missing chain.
    pub fn missing_key(&self) -> Option<&Step> {
        match self {
            Cursor::Found(_) => None,
            Cursor::Missing(absent) => Some(absent.key()),
        }
    }
}

impl<V> From<V> for Cursor<V> {
    fn from(value: V) -> Self {
        Cursor::Found(value)
    }
}

// ── Owned root ─────────────────────────────────────────────────────────────

impl Cursor<Value> {
    /// A fresh, empty object.
    pub fn object() -> Self {
        Cursor::Found(Value::Object(Map::new()))
    }

    /// A fresh, empty array.
    pub fn array() -> Self {
        Cursor::Found(Value::Array(Vec::new()))
    }

    /// Look up a member or element.
    pub fn get(&self, step: impl Into<Step>) -> Cursor<&Value> {
        match self {
            Cursor::Found(v) => descend(v, step.into()),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    /// Look up a member or element for editing.
    pub fn get_mut(&mut self, step: impl Into<Step>) -> Cursor<&mut Value> {
        match self {
            Cursor::Found(v) => descend_mut(v, step.into()),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    /// Follow a JSON Pointer such as `/a/b/0`.
    pub fn pointer(&self, pointer: &str) -> Cursor<&Value> {
        match self {
            Cursor::Found(v) => walk(v, pointer),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    pub fn pointer_mut(&mut self, pointer: &str) -> Cursor<&mut Value> {
        match self {
            Cursor::Found(v) => walk_mut(v, pointer),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    /// The wrapped value, or `None` if the chain failed.
    pub fn found(&self) -> Option<&Value> {
        match self {
            Cursor::Found(v) => Some(v),
            Cursor::Missing(_) => None,
        }
    }

    /// The wrapped value.
    ///
    /// # Errors
    ///
    /// [`CursorError::KeyNotFound`] with the first failed step.
    pub fn resolve(&self) -> Result<&Value> {
        match self {
            Cursor::Found(v) => Ok(v),
            Cursor::Missing(absent) => absent.resolve(),
        }
    }

    /// The wrapped value, or `fallback` if the chain failed.
    pub fn resolve_or<'s>(&'s self, fallback: &'s Value) -> &'s Value {
        match self {
            Cursor::Found(v) => v,
            Cursor::Missing(absent) => absent.resolve_or(fallback),
        }
    }

    /// Unwrap into the owned value.
    pub fn into_value(self) -> Result<Value> {
        match self {
            Cursor::Found(v) => Ok(v),
            Cursor::Missing(absent) => Err(absent.into()),
        }
    }

    pub fn into_value_or(self, fallback: Value) -> Value {
        match self {
            Cursor::Found(v) => v,
            Cursor::Missing(absent) => absent.resolve_or(fallback),
        }
    }

    /// Child cursors: array elements in order, or object values in
    /// insertion order. Scalars and missing chains yield nothing.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.found())
    }

    /// Object member names in insertion order.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.found())
    }
}

// ── Shared view ────────────────────────────────────────────────────────────

impl<'a> Cursor<&'a Value> {
    pub fn get(&self, step: impl Into<Step>) -> Cursor<&'a Value> {
        match self {
            Cursor::Found(v) => descend(*v, step.into()),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    pub fn pointer(&self, pointer: &str) -> Cursor<&'a Value> {
        match self {
            Cursor::Found(v) => walk(*v, pointer),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    pub fn found(&self) -> Option<&'a Value> {
        match self {
            Cursor::Found(v) => Some(*v),
            Cursor::Missing(_) => None,
        }
    }

    pub fn resolve(&self) -> Result<&'a Value> {
        match self {
            Cursor::Found(v) => Ok(*v),
            Cursor::Missing(absent) => absent.resolve(),
        }
    }

    pub fn resolve_or(&self, fallback: &'a Value) -> &'a Value {
        match self {
            Cursor::Found(v) => *v,
            Cursor::Missing(absent) => absent.resolve_or(fallback),
        }
    }

    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.found())
    }

    pub fn keys(&self) -> Keys<'a> {
        Keys::new(self.found())
    }
}

// ── Exclusive view ─────────────────────────────────────────────────────────

impl<'a> Cursor<&'a mut Value> {
    pub fn get(&self, step: impl Into<Step>) -> Cursor<&Value> {
        match self {
            Cursor::Found(v) => descend(&**v, step.into()),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    /// Move the cursor to a child, keeping exclusive access.
    pub fn get_mut(self, step: impl Into<Step>) -> Cursor<&'a mut Value> {
        match self {
            Cursor::Found(v) => descend_mut(v, step.into()),
            Cursor::Missing(absent) => Cursor::Missing(absent),
        }
    }

    pub fn pointer(&self, pointer: &str) -> Cursor<&Value> {
        match self {
            Cursor::Found(v) => walk(&**v, pointer),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    pub fn pointer_mut(self, pointer: &str) -> Cursor<&'a mut Value> {
        match self {
            Cursor::Found(v) => walk_mut(v, pointer),
            Cursor::Missing(absent) => Cursor::Missing(absent),
        }
    }

    pub fn found(&self) -> Option<&Value> {
        match self {
            Cursor::Found(v) => Some(&**v),
            Cursor::Missing(_) => None,
        }
    }

    pub fn resolve(&self) -> Result<&Value> {
        match self {
            Cursor::Found(v) => Ok(&**v),
            Cursor::Missing(absent) => absent.resolve(),
        }
    }

    pub fn resolve_or<'s>(&'s self, fallback: &'s Value) -> &'s Value {
        match self {
            Cursor::Found(v) => &**v,
            Cursor::Missing(absent) => absent.resolve_or(fallback),
        }
    }

    /// Give up the cursor for the exclusive reference it wraps.
    pub fn into_mut(self) -> Result<&'a mut Value> {
        match self {
            Cursor::Found(v) => Ok(v),
            Cursor::Missing(absent) => Err(absent.into()),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.found())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.found())
    }
}

// ── Operations shared by every holder ──────────────────────────────────────

impl<V: Borrow<Value>> Cursor<V> {
    fn value(&self) -> Option<&Value> {
        match self {
            Cursor::Found(v) => Some(value_of(v)),
            Cursor::Missing(_) => None,
        }
    }

    fn require(&self, op: &'static str) -> Result<&Value> {
        match self {
            Cursor::Found(v) => Ok(value_of(v)),
            Cursor::Missing(absent) => Err(absent.reject(op)),
        }
    }

    /// A shared cursor over the same value.
    pub fn borrowed(&self) -> Cursor<&Value> {
        match self {
            Cursor::Found(v) => Cursor::Found(value_of(v)),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    /// An owned copy of this cursor.
    pub fn cloned(&self) -> Document {
        match self {
            Cursor::Found(v) => Cursor::Found(value_of(v).clone()),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    /// Membership test against objects (member names) and arrays (elements).
    ///
    /// Strings and other scalars never contain anything, and neither does a
    /// missing chain. Resolve first to search inside a string.
    pub fn contains(&self, needle: impl Into<Value>) -> bool {
        match self.value() {
            Some(Value::Object(map)) => match needle.into() {
                Value::String(key) => map.contains_key(&key),
                _ => false,
            },
            Some(Value::Array(arr)) => arr.contains(&needle.into()),
            _ => false,
        }
    }

    /// The wrapped number as `f64`; NaN for anything else, including a
    /// missing chain and numeric-looking strings.
    pub fn number(&self) -> f64 {
        self.value().map_or(f64::NAN, cast::number)
    }

    /// Convert to text: strings as-is, other values as compact JSON.
    pub fn cast_str(&self) -> Result<String> {
        self.require("cast_str").map(cast::to_text)
    }

    /// Convert to `i64` like a native conversion: numbers (floats truncate),
    /// booleans and integer strings.
    pub fn cast_i64(&self) -> Result<i64> {
        cast::to_i64(self.require("cast_i64")?)
    }

    pub fn cast_f64(&self) -> Result<f64> {
        cast::to_f64(self.require("cast_f64")?)
    }

    /// Sorted member names of an object; empty for other values.
    ///
    /// # Errors
    ///
    /// [`CursorError::KeyNotFound`] on a missing chain.
    pub fn members(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = match self.require("members")? {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        };
        names.sort();
        Ok(names)
    }

    /// Resolve and deserialize into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.require("deserialize")?;
        let out: T = serde::Deserialize::deserialize(value)?;
        Ok(out)
    }
}

impl<V: BorrowMut<Value>> Cursor<V> {
    /// An exclusive cursor over the same value.
    pub fn borrowed_mut(&mut self) -> Cursor<&mut Value> {
        match self {
            Cursor::Found(v) => Cursor::Found(value_of_mut(v)),
            Cursor::Missing(absent) => Cursor::Missing(absent.clone()),
        }
    }

    /// Store `value` under `step`: any key of an object, or an existing
    /// element of an array.
    ///
    /// # Errors
    ///
    /// - [`CursorError::KeyNotFound`] on a missing chain or an index past the end
    /// - [`CursorError::Type`] if the wrapped value cannot hold `step`
    pub fn set(&mut self, step: impl Into<Step>, value: impl Into<Value>) -> Result<()> {
        let step = step.into();
        match self {
            Cursor::Found(v) => lookup::set(value_of_mut(v), &step, value.into())
                .inspect_err(|err| tracing::debug!(key = %step, %err, "set rejected")),
            Cursor::Missing(absent) => Err(absent.reject("set")),
        }
    }

    /// Store the value another cursor wraps.
    ///
    /// # Errors
    ///
    /// As [`Cursor::set`], and [`CursorError::KeyNotFound`] if `source` is missing.
    pub fn set_from<W: Borrow<Value>>(
        &mut self,
        step: impl Into<Step>,
        source: &Cursor<W>,
    ) -> Result<()> {
        let value = source.require("set_from")?.clone();
        self.set(step, value)
    }

    /// Remove the member or element under `step` and return it.
    ///
    /// # Errors
    ///
    /// - [`CursorError::KeyNotFound`] on a missing chain, absent key or index
    /// - [`CursorError::Type`] if the wrapped value cannot hold `step`
    pub fn remove(&mut self, step: impl Into<Step>) -> Result<Value> {
        let step = step.into();
        match self {
            Cursor::Found(v) => lookup::remove(value_of_mut(v), &step)
                .inspect_err(|err| tracing::debug!(key = %step, %err, "remove rejected")),
            Cursor::Missing(absent) => Err(absent.reject("remove")),
        }
    }
}

/// Equality of the wrapped values. A missing chain equals nothing, not even
/// itself, so there is no `Eq` impl.
impl<V: Borrow<Value>, W: Borrow<Value>> PartialEq<Cursor<W>> for Cursor<V> {
    fn eq(&self, other: &Cursor<W>) -> bool {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Serializes the wrapped value. A missing chain has nothing to serialize and
/// fails with the "key does not exist" message.
impl<V: Borrow<Value>> Serialize for Cursor<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cursor::Found(v) => value_of(v).serialize(serializer),
            Cursor::Missing(absent) => Err(S::Error::custom(absent.error())),
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Cursor::Found(Value::Object(map))
    }
}

impl<V> From<Cursor<V>> for Option<V> {
    fn from(cursor: Cursor<V>) -> Self {
        match cursor {
            Cursor::Found(v) => Some(v),
            Cursor::Missing(_) => None,
        }
    }
}

impl<V: Borrow<Value>> TryFrom<Cursor<V>> for Value {
    type Error = CursorError;

    fn try_from(cursor: Cursor<V>) -> Result<Self> {
        match cursor {
            Cursor::Found(v) => Ok(value_of(&v).clone()),
            Cursor::Missing(absent) => Err(absent.into()),
        }
    }
}

// ── Iteration ──────────────────────────────────────────────────────────────

enum Children<'a> {
    Array(std::slice::Iter<'a, Value>),
    Object(serde_json::map::Values<'a>),
    None,
}

/// Lazy iterator over the children of a cursor.
pub struct Iter<'a> {
    children: Children<'a>,
}

impl<'a> Iter<'a> {
    fn new(value: Option<&'a Value>) -> Self {
        let children = match value {
            Some(Value::Array(arr)) => Children::Array(arr.iter()),
            Some(Value::Object(map)) => Children::Object(map.values()),
            _ => Children::None,
        };
        Self { children }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Cursor<&'a Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let child = match &mut self.children {
            Children::Array(it) => it.next(),
            Children::Object(it) => it.next(),
            Children::None => None,
        };
        child.map(Cursor::Found)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.children {
            Children::Array(it) => it.size_hint(),
            Children::Object(it) => it.size_hint(),
            Children::None => (0, Some(0)),
        }
    }
}

/// Iterator over object member names, in insertion order.
pub struct Keys<'a> {
    inner: Option<serde_json::map::Keys<'a>>,
}

impl<'a> Keys<'a> {
    fn new(value: Option<&'a Value>) -> Self {
        let inner = match value {
            Some(Value::Object(map)) => Some(map.keys()),
            _ => None,
        };
        Self { inner }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(String::as_str)
    }
}

impl<'s, V: Borrow<Value>> IntoIterator for &'s Cursor<V> {
    type Item = Cursor<&'s Value>;
    type IntoIter = Iter<'s>;

    fn into_iter(self) -> Iter<'s> {
        Iter::new(self.value())
    }
}

impl<'a> IntoIterator for Cursor<&'a Value> {
    type Item = Cursor<&'a Value>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        Iter::new(self.found())
    }
}
