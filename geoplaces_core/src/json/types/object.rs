//! JSON object type with sorted, deterministic key order.

use crate::json::{JsonArray, JsonValue, escape_json_string, stringify};
use anyhow::Result;
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// A JSON object backed by a `BTreeMap<String, JsonValue>`.
///
/// Keys iterate in sorted order, which keeps every serialization of the
/// same data identical.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// The string at `key`, or `None` if the key is missing.
	pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
		self.get(key).map(JsonValue::as_str).transpose()
	}

	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
		self.get(key).map(JsonValue::as_object).transpose()
	}

	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	/// Serialize to a compact JSON string.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Parse a JSON string, failing if the root is not an object.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}

	/// Iterate over the entries in sorted key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_and_get() {
		let mut obj = JsonObject::new();
		obj.set("name", "London");
		obj.set("lat", 51.5);

		assert_eq!(obj.get_str("name").unwrap(), Some("London"));
		assert_eq!(obj.get("lat"), Some(&JsonValue::Number(51.5)));
		assert_eq!(obj.get_str("missing").unwrap(), None);
		assert!(obj.get_str("lat").is_err());
	}

	#[test]
	fn remove() {
		let mut obj = JsonObject::from(vec![("a", 1.0), ("b", 2.0)]);
		assert_eq!(obj.remove("a"), Some(JsonValue::Number(1.0)));
		assert_eq!(obj.remove("a"), None);
		assert_eq!(obj.stringify(), r#"{"b":2}"#);
	}

	#[test]
	fn stringify_sorts_keys() {
		let mut obj = JsonObject::new();
		obj.set("zz", 1.0);
		obj.set("aa", 2.0);
		assert_eq!(obj.stringify(), r#"{"aa":2,"zz":1}"#);
	}

	#[test]
	fn parse_str_rejects_non_objects() {
		assert!(JsonObject::parse_str("[1,2]").is_err());
		assert!(JsonObject::parse_str("{\"a\":1}").is_ok());
	}

	#[test]
	fn iter_in_key_order() {
		let obj = JsonObject::from(vec![("b", 1.0), ("a", 2.0)]);
		let keys: Vec<&String> = obj.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec!["a", "b"]);
	}
}
