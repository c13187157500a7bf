//! Chainable, panic-free navigation over `serde_json` values.
//!
//! Lookups on a [`Cursor`] never fail. A missing key, an index past the end
//! or a lookup into a scalar turns the chain into [`Cursor::Missing`], which
//! remembers the first failed step and ignores everything after it. The
//! failure only surfaces when the chain is resolved, and a fallback silences
//! it entirely.
//!
//! # Example
//!
//! ```
//! use json_cursor::{loads, Step};
//! use serde_json::json;
//!
//! let doc = loads(r#"{"a": {"b": [1, 2, 3]}}"#).unwrap();
//!
//! // A chain of successful lookups
//! assert_eq!(doc.get("a").get("b").get(1).resolve().unwrap(), &json!(2));
//!
//! // The first failed step is kept, however long the chain gets
//! let missing = doc.get("a").get("b").get(5).get("c");
//! assert_eq!(missing.missing_key(), Some(&Step::from(5)));
//! assert!(missing.resolve().is_err());
//! assert_eq!(missing.resolve_or(&json!("z")), &json!("z"));
//!
//! // JSON Pointer paths walk the same way
//! assert_eq!(doc.pointer("/a/b/0").resolve().unwrap(), &json!(1));
//! ```

pub mod absent;
pub mod cast;
pub mod codec;
pub mod cursor;
pub mod error;
pub mod lookup;
pub mod pointer;
pub mod step;

pub use absent::Absent;
pub use codec::{
    dump, dump_with, dumps, dumps_with, from_map, from_slice, from_value, load, loads,
    DumpOptions,
};
pub use cursor::{Cursor, Document, Iter, Keys};
pub use error::{CursorError, Result};
pub use step::Step;
