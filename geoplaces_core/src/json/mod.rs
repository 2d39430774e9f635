//! A small JSON model with deterministic serialization.
//!
//! Objects are backed by a `BTreeMap`, so keys always iterate in sorted
//! order. This is what makes re-serializing unmodified data byte-stable.

mod parse;
mod stringify;
mod types;

pub use parse::{parse_json_iter, parse_json_str};
pub use stringify::{escape_json_string, format_json_number, stringify};
pub use types::{JsonArray, JsonObject, JsonValue};
