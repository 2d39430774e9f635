//! Parsing helpers built on top of [`ByteIterator`].
//!
//! Together these implement the JSON token grammar: fixed tags, quoted
//! strings with escapes, numbers, and the entry loops for objects and
//! arrays. The JSON value parser in `crate::json` composes them.

use super::iterator::ByteIterator;
use anyhow::{Context, Error, Result, bail};
use std::str::FromStr;

/// Match a fixed ASCII tag (`true`, `false`, `null`) at the current position.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		match iter.expect_next_byte()? {
			b if b == c => {}
			_ => return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'"))),
		}
	}
	Ok(())
}

/// Parse a JSON string literal, handling the standard escapes and `\uXXXX`.
///
/// Leaves the iterator positioned after the closing quote.
pub fn parse_quoted_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);

	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let unit = parse_hex_unit(iter)?;
					// A high surrogate must be followed by an escaped low
					// surrogate; together they encode one astral character.
					let units = if (0xD800..0xDC00).contains(&unit) {
						if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
							return Err(iter.format_error("unpaired surrogate in unicode escape"));
						}
						vec![unit, parse_hex_unit(iter)?]
					} else {
						vec![unit]
					};
					bytes.extend_from_slice(
						&String::from_utf16(&units)
							.map_err(|_| iter.format_error("invalid unicode escape"))?
							.into_bytes(),
					);
				}
				c => bytes.push(c),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

fn parse_hex_unit(iter: &mut ByteIterator) -> Result<u16> {
	let mut hex = [0u8; 4];
	for i in &mut hex {
		*i = iter.expect_next_byte()?;
	}
	std::str::from_utf8(&hex)
		.ok()
		.and_then(|h| u16::from_str_radix(h, 16).ok())
		.ok_or_else(|| iter.format_error("invalid unicode escape"))
}

/// Parse a JSON number and return its textual representation.
///
/// Leaves the iterator at the first non-number byte.
pub fn parse_number_str(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut integer_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		integer_digits = true;
		number.push(iter.expect_next_byte()?);
	}
	if !integer_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		let mut fraction_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fraction_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !fraction_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Parse a JSON number and convert it to `R`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_str(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Iterate over the entries of a JSON object, calling `parse_value` per key.
///
/// The closure receives the key and the iterator positioned at the start of
/// the value and must consume exactly that value.
pub fn parse_object_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<R>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	loop {
		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b'}' => {
				iter.advance();
				break;
			}
			b'"' => {
				let key = parse_quoted_string(iter)?;

				iter.skip_whitespace();
				if iter.expect_next_byte()? != b':' {
					return Err(iter.format_error("expected ':'"));
				}

				iter.skip_whitespace();
				parse_value(key.clone(), iter).with_context(|| format!("while parsing the value of '{key}'"))?;

				iter.skip_whitespace();
				match iter.expect_next_byte()? {
					b',' => {}
					b'}' => break,
					_ => return Err(iter.format_error("expected ',' or '}'")),
				}
			}
			_ => return Err(iter.format_error("parsing object, expected '\"' or '}'")),
		}
	}
	Ok(())
}

/// Iterate over the entries of a JSON array, collecting the parsed elements.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	result.push(parse_value(iter)?);

	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => {
				iter.skip_whitespace();
				result.push(parse_value(iter)?);
			}
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}
