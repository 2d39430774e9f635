//! The in-memory GeoJSON place model.
//!
//! One [`PlaceCollection`] corresponds to one stored `data.geojson` file
//! and holds the sibling features of one tree level. Parsing is tolerant
//! where hand-edited files need it to be: a missing `features` key is an
//! empty collection, a missing feature `id` is the empty string, and a
//! `null` geometry counts as absent. Everything else must have the
//! documented shape.

use anyhow::{Result, anyhow, bail};
use geoplaces_core::json::{JsonObject, JsonValue, parse_json_str};
use std::collections::BTreeMap;

/// The per-directory GeoJSON file name.
pub const DATA_FILE: &str = "data.geojson";

/// The per-directory flag asset name.
pub const FLAG_FILE: &str = "flag.svg";

/// A point location: `[longitude, latitude]` in WGS84 decimal degrees.
///
/// Longitude first, per the GeoJSON convention. Values are rounded to five
/// decimal places at import time, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct PointGeometry {
	pub coordinates: [f64; 2],
}

impl PointGeometry {
	#[must_use]
	pub fn new(longitude: f64, latitude: f64) -> Self {
		Self {
			coordinates: [longitude, latitude],
		}
	}

	/// The `[0,0]` placeholder used for features without a known location.
	#[must_use]
	pub fn origin() -> Self {
		Self::new(0.0, 0.0)
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.coordinates[0]
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.coordinates[1]
	}

	fn from_json(object: &JsonObject) -> Result<Self> {
		if let Some(geometry_type) = object.get_str("type")? {
			if geometry_type != "Point" {
				bail!("unsupported geometry type '{geometry_type}', only 'Point' is stored");
			}
		}
		let coordinates = object
			.get_array("coordinates")?
			.ok_or_else(|| anyhow!("geometry has no coordinates"))?
			.as_number_array::<2>()?;
		Ok(Self { coordinates })
	}
}

/// One place record: id, optional point geometry, optional translations.
///
/// `None` for geometry or properties means the stored feature has no such
/// key (stub features synthesized by the repair engine); canonicalization
/// fills both in.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceFeature {
	/// The canonical (English) place name at this tree level.
	pub id: String,
	pub geometry: Option<PointGeometry>,
	/// Language code → translated name.
	pub properties: Option<BTreeMap<String, String>>,
}

impl PlaceFeature {
	/// A bare feature carrying nothing but its id.
	#[must_use]
	pub fn stub(id: &str) -> Self {
		Self {
			id: id.to_string(),
			geometry: None,
			properties: None,
		}
	}

	/// A feature with a point location.
	#[must_use]
	pub fn with_point(id: &str, longitude: f64, latitude: f64) -> Self {
		Self {
			id: id.to_string(),
			geometry: Some(PointGeometry::new(longitude, latitude)),
			properties: None,
		}
	}

	fn from_json(object: &JsonObject) -> Result<Self> {
		let id = object.get_str("id")?.unwrap_or_default().to_string();

		let geometry = match object.get("geometry") {
			None | Some(JsonValue::Null) => None,
			Some(value) => Some(PointGeometry::from_json(value.as_object()?)?),
		};

		let properties = match object.get("properties") {
			None | Some(JsonValue::Null) => None,
			Some(value) => {
				let mut map = BTreeMap::new();
				for (language, name) in value.as_object()?.iter() {
					map.insert(language.clone(), name.as_str()?.to_string());
				}
				Some(map)
			}
		};

		Ok(Self { id, geometry, properties })
	}

	/// Set `properties[language]`, creating the mapping if absent.
	pub fn set_translation(&mut self, language: &str, translation: &str) {
		self
			.properties
			.get_or_insert_with(BTreeMap::new)
			.insert(language.to_string(), translation.to_string());
	}

	/// Remove `properties[language]`, returning the previous value.
	pub fn remove_translation(&mut self, language: &str) -> Option<String> {
		self.properties.as_mut().and_then(|map| map.remove(language))
	}

	/// The translated name for `language`, falling back to the id.
	#[must_use]
	pub fn translated_name(&self, language: &str) -> &str {
		self
			.properties
			.as_ref()
			.and_then(|map| map.get(language))
			.map_or(self.id.as_str(), String::as_str)
	}

	/// Normalize the feature into its stored shape: default a missing
	/// geometry to `[0,0]`, default missing properties to an empty map,
	/// and drop translations that merely repeat the id.
	pub fn canonicalize(&mut self) {
		self.geometry.get_or_insert_with(PointGeometry::origin);
		let id = self.id.clone();
		self
			.properties
			.get_or_insert_with(BTreeMap::new)
			.retain(|_, name| *name != id);
	}
}

/// The sibling features of one tree level, as stored in one `data.geojson`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaceCollection {
	pub features: Vec<PlaceFeature>,
}

impl PlaceCollection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse the text of a `data.geojson` file.
	pub fn parse(text: &str) -> Result<Self> {
		let object = parse_json_str(text)?.into_object()?;

		let features = match object.get_array("features")? {
			Some(array) => array
				.iter()
				.map(|value| PlaceFeature::from_json(value.as_object()?))
				.collect::<Result<Vec<_>>>()?,
			// Tolerate hand-edited files without a features key.
			None => Vec::new(),
		};

		Ok(Self { features })
	}

	/// Exact, case-sensitive id lookup.
	#[must_use]
	pub fn contains_id(&self, id: &str) -> bool {
		self.features.iter().any(|feature| feature.id == id)
	}

	#[must_use]
	pub fn feature(&self, id: &str) -> Option<&PlaceFeature> {
		self.features.iter().find(|feature| feature.id == id)
	}

	pub fn feature_mut(&mut self, id: &str) -> Option<&mut PlaceFeature> {
		self.features.iter_mut().find(|feature| feature.id == id)
	}

	pub fn push(&mut self, feature: PlaceFeature) {
		self.features.push(feature);
	}

	/// The first id shared by two features, if any.
	#[must_use]
	pub fn duplicate_id(&self) -> Option<&str> {
		let mut seen = std::collections::BTreeSet::new();
		for feature in &self.features {
			if !seen.insert(feature.id.as_str()) {
				return Some(&feature.id);
			}
		}
		None
	}

	/// Canonicalize every feature. Ordering is left to the formatter.
	pub fn canonicalize(&mut self) {
		for feature in &mut self.features {
			feature.canonicalize();
		}
	}
}
