//! The canonical textual form of a `data.geojson` file.
//!
//! The data tree lives under version control, so the formatter has exactly
//! one output per logical content: features sorted by id, properties sorted
//! by language code, fixed key order within a feature, one tab per nesting
//! level, literal UTF-8 strings, and coordinate pairs on a single line.
//! Formatting is idempotent: parsing the output and formatting it again
//! yields identical bytes.
//!
//! Emission works directly from the typed model rather than through a
//! generic pretty-printer, so there is no post-processing step that could
//! drift out of sync with the structure.

use crate::model::{PlaceCollection, PlaceFeature, PointGeometry};
use geoplaces_core::json::{escape_json_string, format_json_number};

/// Render a collection into its canonical storage form.
///
/// Features are ordered by id (ordinal, ascending); the input order does
/// not matter. Optional members (geometry, properties) are omitted when
/// absent, so freshly synthesized stub features stay minimal until the
/// canonicalization pass fills them in. The output carries no trailing
/// newline.
#[must_use]
pub fn format_collection(collection: &PlaceCollection) -> String {
	let mut features: Vec<&PlaceFeature> = collection.features.iter().collect();
	features.sort_by(|a, b| a.id.cmp(&b.id));

	let mut text = String::new();
	text.push_str("{\n\t\"type\": \"FeatureCollection\",\n\t\"features\": ");

	if features.is_empty() {
		text.push_str("[]\n}");
		return text;
	}

	text.push_str("[\n");
	for (index, feature) in features.iter().enumerate() {
		write_feature(&mut text, feature);
		if index + 1 < features.len() {
			text.push(',');
		}
		text.push('\n');
	}
	text.push_str("\t]\n}");
	text
}

fn write_feature(text: &mut String, feature: &PlaceFeature) {
	let mut members = Vec::with_capacity(4);
	members.push(format!("\t\t\t\"id\": {}", quote(&feature.id)));
	members.push("\t\t\t\"type\": \"Feature\"".to_string());

	if let Some(geometry) = &feature.geometry {
		members.push(format_geometry(geometry));
	}

	if let Some(properties) = &feature.properties {
		if properties.is_empty() {
			members.push("\t\t\t\"properties\": {}".to_string());
		} else {
			let entries = properties
				.iter()
				.map(|(language, name)| format!("\t\t\t\t{}: {}", quote(language), quote(name)))
				.collect::<Vec<_>>()
				.join(",\n");
			members.push(format!("\t\t\t\"properties\": {{\n{entries}\n\t\t\t}}"));
		}
	}

	text.push_str("\t\t{\n");
	text.push_str(&members.join(",\n"));
	text.push_str("\n\t\t}");
}

// The coordinate pair stays on one line, with no space after the comma.
fn format_geometry(geometry: &PointGeometry) -> String {
	format!(
		"\t\t\t\"geometry\": {{\n\t\t\t\t\"type\": \"Point\",\n\t\t\t\t\"coordinates\": [{},{}]\n\t\t\t}}",
		format_json_number(geometry.longitude()),
		format_json_number(geometry.latitude())
	)
}

fn quote(value: &str) -> String {
	format!("\"{}\"", escape_json_string(value))
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	fn canonical(mut collection: PlaceCollection) -> String {
		collection.canonicalize();
		format_collection(&collection)
	}

	#[test]
	fn empty_collection() {
		assert_eq!(
			format_collection(&PlaceCollection::new()),
			"{\n\t\"type\": \"FeatureCollection\",\n\t\"features\": []\n}"
		);
	}

	#[test]
	fn single_stub_feature() {
		let mut collection = PlaceCollection::new();
		collection.push(PlaceFeature::stub("Kent"));

		assert_eq!(
			format_collection(&collection),
			concat!(
				"{\n",
				"\t\"type\": \"FeatureCollection\",\n",
				"\t\"features\": [\n",
				"\t\t{\n",
				"\t\t\t\"id\": \"Kent\",\n",
				"\t\t\t\"type\": \"Feature\"\n",
				"\t\t}\n",
				"\t]\n",
				"}"
			)
		);
	}

	#[test]
	fn full_feature_layout() {
		let mut collection = PlaceCollection::new();
		let mut feature = PlaceFeature::with_point("Genève", 6.14569, 46.20222);
		feature.set_translation("de", "Genf");
		feature.set_translation("en", "Geneva");
		collection.push(feature);

		assert_eq!(
			format_collection(&collection),
			concat!(
				"{\n",
				"\t\"type\": \"FeatureCollection\",\n",
				"\t\"features\": [\n",
				"\t\t{\n",
				"\t\t\t\"id\": \"Genève\",\n",
				"\t\t\t\"type\": \"Feature\",\n",
				"\t\t\t\"geometry\": {\n",
				"\t\t\t\t\"type\": \"Point\",\n",
				"\t\t\t\t\"coordinates\": [6.14569,46.20222]\n",
				"\t\t\t},\n",
				"\t\t\t\"properties\": {\n",
				"\t\t\t\t\"de\": \"Genf\",\n",
				"\t\t\t\t\"en\": \"Geneva\"\n",
				"\t\t\t}\n",
				"\t\t}\n",
				"\t]\n",
				"}"
			)
		);
	}

	#[test]
	fn features_are_sorted_by_id() {
		let mut collection = PlaceCollection::new();
		collection.push(PlaceFeature::stub("Zurich"));
		collection.push(PlaceFeature::stub("Bern"));
		collection.push(PlaceFeature::stub("Luzern"));

		let text = format_collection(&collection);
		let bern = text.find("Bern").unwrap();
		let luzern = text.find("Luzern").unwrap();
		let zurich = text.find("Zurich").unwrap();
		assert!(bern < luzern && luzern < zurich);
	}

	#[test]
	fn canonical_feature_carries_empty_properties_inline() {
		let mut collection = PlaceCollection::new();
		collection.push(PlaceFeature::stub("Solo"));
		let text = canonical(collection);

		assert!(text.contains("\t\t\t\t\"coordinates\": [0,0]\n"));
		assert!(text.contains("\t\t\t\"properties\": {}\n"));
	}

	#[test]
	fn formatting_is_idempotent() -> Result<()> {
		let mut collection = PlaceCollection::new();
		let mut feature = PlaceFeature::with_point("München", 11.57549, 48.13743);
		feature.set_translation("cs", "Mnichov");
		feature.set_translation("fr", "Munich");
		collection.push(feature);
		collection.push(PlaceFeature::stub("Augsburg"));
		collection.canonicalize();

		let first = format_collection(&collection);
		let mut reparsed = PlaceCollection::parse(&first)?;
		reparsed.canonicalize();
		let second = format_collection(&reparsed);
		assert_eq!(first, second);
		Ok(())
	}

	#[test]
	fn no_trailing_newline() {
		let text = format_collection(&PlaceCollection::new());
		assert!(!text.ends_with('\n'));
	}
}
