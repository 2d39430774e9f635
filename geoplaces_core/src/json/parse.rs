//! Recursive-descent JSON parser on top of [`ByteIterator`].

use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_string, parse_tag,
};
use crate::json::{JsonArray, JsonObject, JsonValue};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, io::Cursor};

/// Parse a complete JSON document from a string.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_reader(Cursor::new(json.as_bytes().to_vec()));
	let value = parse_json_iter(&mut iter).with_context(|| format!("while parsing JSON '{}'", snip(json)))?;
	iter.skip_whitespace();
	if iter.peek().is_some() {
		return Err(iter.format_error("unexpected trailing characters"));
	}
	Ok(value)
}

// Error context shows at most the head of the document.
fn snip(json: &str) -> &str {
	match json.char_indices().nth(32) {
		Some((index, _)) => &json[..index],
		None => json,
	}
}

/// Parse a single JSON value at the iterator position.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array_entries(iter, parse_json_iter).map(|i| JsonValue::Array(JsonArray(i))),
		b'{' => parse_json_object(iter),
		b'"' => parse_quoted_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'.' || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|_| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|_| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|_| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator) -> Result<JsonValue> {
	let mut map = BTreeMap::new();
	parse_object_entries(iter, |key, iter2| {
		map.insert(key, parse_json_iter(iter2)?);
		Ok(())
	})?;
	Ok(JsonValue::Object(JsonObject(map)))
}
