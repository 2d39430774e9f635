//! JSON array type.

use crate::json::{JsonValue, stringify};
use anyhow::{Result, anyhow};
use std::fmt::Debug;

/// A JSON array backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	/// Serialize to a compact JSON string.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// Convert all elements to numbers.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
	}

	/// Convert to a fixed-size array of numbers, failing on length mismatch.
	pub fn as_number_array<const N: usize>(&self) -> Result<[f64; N]> {
		self
			.as_number_vec()?
			.try_into()
			.map_err(|v: Vec<f64>| anyhow!("expected {N} numbers, found {}", v.len()))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &JsonValue> {
		self.0.iter()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}
