//! Decoding into cursors and encoding values or cursors back to JSON text.
//!
//! Decoding errors are `serde_json` errors, returned unchanged. Encoding
//! accepts any `Serialize` value, so a [`Cursor`] encodes as the value it
//! wraps; a missing chain fails to encode.

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cursor::{Cursor, Document};

/// Options for [`dumps_with`] and [`dump_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Indent with two spaces and put members on separate lines.
    pub pretty: bool,
    /// Emit object members sorted by key instead of in insertion order.
    pub sort_keys: bool,
}

impl DumpOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}

/// Parse JSON text and wrap the root.
pub fn loads(text: &str) -> Result<Document, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    Ok(Cursor::new(value))
}

/// Parse JSON bytes and wrap the root.
pub fn from_slice(bytes: &[u8]) -> Result<Document, serde_json::Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(Cursor::new(value))
}

/// Read JSON from `reader` and wrap the root.
pub fn load<R: Read>(reader: R) -> Result<Document, serde_json::Error> {
    let value: Value = serde_json::from_reader(reader)?;
    Ok(Cursor::new(value))
}

/// Wrap an in-memory value.
pub fn from_value(value: impl Into<Value>) -> Document {
    Cursor::new(value.into())
}

/// Wrap an in-memory object.
pub fn from_map(map: Map<String, Value>) -> Document {
    Cursor::from(map)
}

/// Encode as compact JSON text.
pub fn dumps<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn dumps_with<T: Serialize + ?Sized>(
    value: &T,
    options: &DumpOptions,
) -> Result<String, serde_json::Error> {
    if options.sort_keys {
        let mut tree = serde_json::to_value(value)?;
        sort_keys(&mut tree);
        return to_string(&tree, options.pretty);
    }
    to_string(value, options.pretty)
}

/// Encode as compact JSON into `writer`.
pub fn dump<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
) -> Result<(), serde_json::Error> {
    serde_json::to_writer(writer, value)
}

pub fn dump_with<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    options: &DumpOptions,
) -> Result<(), serde_json::Error> {
    if options.sort_keys {
        let mut tree = serde_json::to_value(value)?;
        sort_keys(&mut tree);
        return write(writer, &tree, options.pretty);
    }
    write(writer, value, options.pretty)
}

fn to_string<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn write<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    pretty: bool,
) -> Result<(), serde_json::Error> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.sort_keys();
            map.values_mut().for_each(sort_keys);
        }
        Value::Array(arr) => arr.iter_mut().for_each(sort_keys),
        _ => {}
    }
}
