//! dotq - dot-notation accessor for nested values.
//!
//! Retrieve deeply nested values from mixed mapping/sequence structures with
//! a single dot-delimited path (e.g. `"hello.salute"`, `"3.four.success"`).
//!
//! # Features
//!
//! - One [`Value`] model covering scalars, sequences, and mappings keyed by
//!   strings or integers
//! - Validated dot-notation queries ([`is_valid_query`])
//! - [`get`] with a precise error taxonomy: malformed query, unsearchable
//!   root, or a miss that names the failing segment
//! - [`get_or`] for caller-supplied defaults - a default of `0`, `""`, or
//!   `false` is returned like any other
//! - [`exists`] checks that ignore the resolved value's truthiness
//! - serde interop: [`Value`] serializes untagged and converts to and from
//!   `serde_json::Value`
//!
//! # Example
//!
//! ```
//! use dotq::{Value, get, get_or};
//!
//! let data: Value = serde_json::json!({
//!     "hello": { "salute": 1 },
//!     "items": [1, 2, "three"]
//! })
//! .into();
//!
//! assert_eq!(get(&data, "hello.salute")?, &Value::Int(1));
//! assert_eq!(get(&data, "items.2")?, &Value::String("three".into()));
//!
//! let fallback = Value::Int(0);
//! assert_eq!(get_or(&data, "hello.missing", &fallback)?, &Value::Int(0));
//! # Ok::<(), dotq::Error>(())
//! ```
//!
//! Numeric segments always mean integer access: they address sequence
//! positions and integer map keys, never string keys that happen to be
//! digits. Callers must know their schema.

pub mod error;
pub mod query;
pub mod value;

pub use error::{Error, KeyNotFound, Result};
pub use query::{PathSegment, QueryPath, exists, get, get_or, is_valid_query};
pub use value::{Key, Value, is_searchable};
