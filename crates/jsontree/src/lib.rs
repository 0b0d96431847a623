//! # jsontree
//!
//! A small, self-contained JSON parser and serializer over an ordered value
//! tree. The whole input is parsed from one in-memory string — no streaming,
//! no I/O — and serialization layout is driven by a configurable
//! [`IndentationPolicy`], from fully compact to any indent/newline scheme.
//!
//! What sets it apart from a general serde frontend:
//!
//! - **Integers and floats stay distinct.** `1` parses as [`Value::Int`],
//!   `1.0` and `1e2` as [`Value::Float`], and serialization keeps it that
//!   way.
//! - **Objects keep insertion order and reject duplicate keys** at parse
//!   time instead of silently overwriting.
//! - **Errors carry byte offsets** and abort the parse; there is no
//!   recovery and no partial result.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree::{parse, serialize, IndentationPolicy, Value};
//!
//! let value = parse(r#"{"name":"Ada","scores":[95,87.5]}"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Ada"));
//!
//! // Compact output inserts no whitespace at all.
//! assert_eq!(serialize(&value, None), r#"{"name":"Ada","scores":[95,87.5]}"#);
//!
//! // Indented output is controlled by the policy.
//! let pretty = serialize(&value, Some(IndentationPolicy::new("  ", " ", "\n")));
//! assert!(pretty.starts_with("{\n  \"name\": \"Ada\""));
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — recursive-descent grammar, JSON text → [`Value`]
//! - [`writer`] — [`Value`] → JSON text under an [`IndentationPolicy`]
//! - [`cursor`] — positioned read-only view the lexical rules consume from
//! - [`indent`] — the whitespace policy, including its compact variant
//! - [`value`] — the value tree and its accessors
//! - [`error`] — the parse error taxonomy
//!
//! `Value` also implements `serde::Serialize`/`Deserialize` and converts to
//! and from `serde_json::Value`.
//!
//! With the `comments` cargo feature, `//` line and `/* ... */` block
//! comments are treated as whitespace anywhere whitespace is legal.

mod convert;
pub mod cursor;
pub mod error;
pub mod indent;
pub mod parser;
pub mod value;
pub mod writer;

pub use error::{ParseError, Result};
pub use indent::IndentationPolicy;
pub use parser::parse;
pub use value::{Object, Value};
pub use writer::serialize;
