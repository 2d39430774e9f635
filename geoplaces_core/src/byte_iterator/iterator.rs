//! An iterator over the bytes of a reader with single-byte lookahead.
//!
//! Errors carry the absolute byte position and a short snippet of the most
//! recently consumed input, which is enough to locate a syntax error in a
//! hand-edited file.

use anyhow::{Error, anyhow};
use std::io::Read;

const SNIPPET_SIZE: usize = 24;
const BUFFER_SIZE: usize = 4096;

/// A buffered byte iterator supporting `peek`/`advance`/`consume`.
pub struct ByteIterator<'a> {
	buffer: [u8; BUFFER_SIZE],
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	snippet: Vec<u8>,
}

impl<'a> ByteIterator<'a> {
	pub fn from_reader(reader: impl Read + 'a) -> Self {
		let mut instance = ByteIterator {
			buffer: [0; BUFFER_SIZE],
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			snippet: Vec::with_capacity(SNIPPET_SIZE),
		};
		instance.advance();
		instance
	}

	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.buffer_len = self.source.read(&mut self.buffer).unwrap_or(0);
			self.buffer_pos = 0;
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Build an error annotated with the current position and recent input.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let mut context = String::from_utf8_lossy(&self.snippet).into_owned();
		if self.peeked_byte.is_none() {
			context.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {}", self.position.saturating_sub(1), context)
	}

	/// The absolute position of the peeked byte in the stream.
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// The next byte, without consuming it.
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Move the lookahead one byte forward.
	pub fn advance(&mut self) {
		if let Some(byte) = self.peeked_byte {
			if self.snippet.len() >= SNIPPET_SIZE {
				self.snippet.remove(0);
			}
			self.snippet.push(byte);
		}
		self.peeked_byte = self.next_byte();
		self.position += 1;
	}

	/// Return the peeked byte and advance.
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Like [`consume`](Self::consume), but an unexpected end is an error.
	pub fn expect_next_byte(&mut self) -> anyhow::Result<u8> {
		match self.peeked_byte {
			Some(byte) => {
				self.advance();
				Ok(byte)
			}
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Like [`peek`](Self::peek), but an unexpected end is an error.
	pub fn expect_peeked_byte(&self) -> anyhow::Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skip ASCII whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}
}
