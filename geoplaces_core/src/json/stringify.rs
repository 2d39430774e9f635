//! Compact JSON serialization and the escaping rules shared with the
//! canonical geodata formatter.

use super::JsonValue;

/// Serialize a value to a compact JSON string without extra whitespace.
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) => format_json_number(*n),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

/// Escape a string for embedding in JSON.
///
/// Non-ASCII text stays literal UTF-8; translated place names are stored
/// readably, not as `\uXXXX` sequences.
pub fn escape_json_string(input: &str) -> String {
	input
		.chars()
		.map(|c| match c {
			'"' => "\\\"".to_string(),
			'\\' => "\\\\".to_string(),
			'\n' => "\\n".to_string(),
			'\r' => "\\r".to_string(),
			'\t' => "\\t".to_string(),
			'\u{08}' => "\\b".to_string(),
			'\u{0c}' => "\\f".to_string(),
			c if c.is_control() => format!("\\u{:04x}", c as u32),
			c => c.to_string(),
		})
		.collect()
}

/// Format a number the way it is stored: shortest round-trip decimal,
/// integers without a fractional part (`0`, not `0.0`).
pub fn format_json_number(value: f64) -> String {
	value.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::parse_json_str;
	use anyhow::Result;

	#[test]
	fn stringify_primitives() -> Result<()> {
		assert_eq!(stringify(&parse_json_str("42")?), "42");
		assert_eq!(stringify(&parse_json_str("true")?), "true");
		assert_eq!(stringify(&parse_json_str("null")?), "null");
		assert_eq!(stringify(&parse_json_str("\"hi\"")?), "\"hi\"");
		Ok(())
	}

	#[test]
	fn stringify_nested() -> Result<()> {
		let json = parse_json_str(r#"{"outer": {"inner": [1, "two", true]}}"#)?;
		assert_eq!(stringify(&json), r#"{"outer":{"inner":[1,"two",true]}}"#);
		Ok(())
	}

	#[test]
	fn escape_keeps_unicode_literal() {
		assert_eq!(escape_json_string("Genève"), "Genève");
		assert_eq!(escape_json_string("東京"), "東京");
	}

	#[test]
	fn escape_special_characters() {
		assert_eq!(escape_json_string("a\"b\\c"), "a\\\"b\\\\c");
		assert_eq!(escape_json_string("line1\nline2\t"), "line1\\nline2\\t");
		assert_eq!(escape_json_string("\u{01}"), "\\u0001");
	}

	#[test]
	fn number_formatting() {
		assert_eq!(format_json_number(0.0), "0");
		assert_eq!(format_json_number(51.5), "51.5");
		assert_eq!(format_json_number(-0.1), "-0.1");
		assert_eq!(format_json_number(10.75), "10.75");
		assert_eq!(format_json_number(-123.45678), "-123.45678");
	}
}
