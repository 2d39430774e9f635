//! Targeted mutations of single place records.
//!
//! A place is addressed by a `/`-delimited path of English names, e.g.
//! `England/London`: the last segment is the feature id, everything before
//! it names the directory whose `data.geojson` holds the feature. Every
//! mutation rewrites the touched file through the canonical formatter.

use crate::error::GeodataError;
use crate::format::format_collection;
use crate::model::{DATA_FILE, PlaceCollection, PlaceFeature, PointGeometry};
use anyhow::Result;
use geoplaces_core::io::{Filesystem, basename, dirname, join};
use geoplaces_core::report::Reporter;
use log::debug;

/// Read-modify-write access to individual features in the tree.
pub struct PlaceEditor<'a> {
	fs: &'a mut dyn Filesystem,
	reporter: &'a dyn Reporter,
}

impl<'a> PlaceEditor<'a> {
	pub fn new(fs: &'a mut dyn Filesystem, reporter: &'a dyn Reporter) -> Self {
		Self { fs, reporter }
	}

	/// Set a place's coordinates, in signed decimal degrees, longitude
	/// first. The target file is created if absent; an existing feature
	/// gets its geometry replaced, a missing one is appended.
	pub fn import_coordinates(&mut self, place: &str, longitude: f64, latitude: f64) -> Result<()> {
		let (file, id) = locate(place);
		let mut collection = self.load_or_create(&file)?;

		if let Some(feature) = collection.feature_mut(&id) {
			self.reporter.report(&format!("updating {place}"));
			feature.geometry = Some(PointGeometry::new(longitude, latitude));
		} else {
			self.reporter.report(&format!("creating {place}"));
			collection.push(PlaceFeature::with_point(&id, longitude, latitude));
		}

		self.store(&file, &collection)
	}

	/// Set `properties[language]` on an existing place. An empty
	/// translation deletes the entry instead. A place that does not exist
	/// is reported and left alone.
	pub fn set_translation(&mut self, place: &str, language: &str, translation: &str) -> Result<()> {
		let (file, id) = locate(place);
		let mut collection = self.load(&file)?;

		let Some(feature) = collection.feature_mut(&id) else {
			self.reporter.report(&format!("no feature '{id}' in {file}, nothing to translate"));
			return Ok(());
		};

		if translation.is_empty() {
			self.reporter.report(&format!("removing {language}/{place}"));
			feature.remove_translation(language);
		} else {
			self.reporter.report(&format!("setting {language}/{place} to {translation}"));
			feature.set_translation(language, translation);
		}

		self.store(&file, &collection)
	}

	/// Guarantee the parent file records a feature for `place`, creating a
	/// stub when absent. Used before merging external data.
	pub fn ensure_feature(&mut self, place: &str) -> Result<()> {
		let (file, id) = locate(place);
		let mut collection = self.load_or_create(&file)?;

		if collection.contains_id(&id) {
			debug!("'{id}' already present in '{file}'");
			return Ok(());
		}

		self.reporter.report(&format!("creating {place}"));
		collection.push(PlaceFeature::stub(&id));
		self.store(&file, &collection)
	}

	fn load(&self, file: &str) -> Result<PlaceCollection> {
		let text = self
			.fs
			.read_to_string(file)
			.map_err(|error| GeodataError::io(file, error))?;
		Ok(PlaceCollection::parse(&text).map_err(|error| GeodataError::parse(file, error))?)
	}

	fn load_or_create(&mut self, file: &str) -> Result<PlaceCollection> {
		if self.fs.has(file) {
			self.load(file)
		} else {
			self.reporter.report(&format!("creating {file}"));
			Ok(PlaceCollection::new())
		}
	}

	fn store(&mut self, file: &str, collection: &PlaceCollection) -> Result<()> {
		self
			.fs
			.write(file, format_collection(collection).as_bytes())
			.map_err(|error| GeodataError::io(file, error).into())
	}
}

/// Split a place path into its data file and feature id.
fn locate(place: &str) -> (String, String) {
	let file = join(dirname(place), DATA_FILE);
	(file, basename(place).to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoplaces_core::io::MemoryFilesystem;
	use geoplaces_core::report::MemoryReporter;

	fn editor_run(
		fs: &mut MemoryFilesystem,
		action: impl FnOnce(&mut PlaceEditor) -> Result<()>,
	) -> MemoryReporter {
		let reporter = MemoryReporter::new();
		let mut editor = PlaceEditor::new(fs, &reporter);
		action(&mut editor).unwrap();
		reporter
	}

	#[test]
	fn locate_splits_place_paths() {
		assert_eq!(
			locate("England/London"),
			("England/data.geojson".to_string(), "London".to_string())
		);
		assert_eq!(locate("England"), ("data.geojson".to_string(), "England".to_string()));
	}

	#[test]
	fn import_creates_file_and_feature() {
		let mut fs = MemoryFilesystem::from_files(vec![]);
		let reporter = editor_run(&mut fs, |e| e.import_coordinates("England/London", -0.1, 51.5));

		assert!(reporter.contains("creating England/data.geojson"));
		assert!(reporter.contains("creating England/London"));

		let collection =
			PlaceCollection::parse(&fs.read_to_string("England/data.geojson").unwrap()).unwrap();
		let feature = collection.feature("London").unwrap();
		assert_eq!(feature.geometry.as_ref().unwrap().coordinates, [-0.1, 51.5]);
	}

	#[test]
	fn import_replaces_existing_geometry() {
		let mut fs = MemoryFilesystem::from_files(vec![(
			"data.geojson",
			r#"{"features": [{"id": "England", "geometry": {"type": "Point", "coordinates": [0,0]}, "properties": {"fr": "Angleterre"}}]}"#,
		)]);
		let reporter = editor_run(&mut fs, |e| e.import_coordinates("England", -1.5, 52.5));

		assert!(reporter.contains("updating England"));
		let collection = PlaceCollection::parse(&fs.read_to_string("data.geojson").unwrap()).unwrap();
		let feature = collection.feature("England").unwrap();
		assert_eq!(feature.geometry.as_ref().unwrap().coordinates, [-1.5, 52.5]);
		assert_eq!(feature.translated_name("fr"), "Angleterre");
	}

	#[test]
	fn translation_set_and_delete() {
		let mut fs = MemoryFilesystem::from_files(vec![(
			"England/data.geojson",
			r#"{"features": [{"id": "London"}]}"#,
		)]);

		let reporter = editor_run(&mut fs, |e| e.set_translation("England/London", "fr", "Londres"));
		assert!(reporter.contains("setting fr/England/London to Londres"));
		let collection =
			PlaceCollection::parse(&fs.read_to_string("England/data.geojson").unwrap()).unwrap();
		assert_eq!(collection.feature("London").unwrap().translated_name("fr"), "Londres");

		let reporter = editor_run(&mut fs, |e| e.set_translation("England/London", "fr", ""));
		assert!(reporter.contains("removing fr/England/London"));
		let collection =
			PlaceCollection::parse(&fs.read_to_string("England/data.geojson").unwrap()).unwrap();
		assert_eq!(collection.feature("London").unwrap().translated_name("fr"), "London");
	}

	#[test]
	fn translating_a_missing_place_reports_and_leaves_the_file_alone() {
		let original = r#"{"features": [{"id": "York"}]}"#;
		let mut fs = MemoryFilesystem::from_files(vec![("England/data.geojson", original)]);
		let reporter = editor_run(&mut fs, |e| e.set_translation("England/London", "fr", "Londres"));

		assert!(reporter.contains("no feature 'London' in England/data.geojson"));
		assert_eq!(fs.read_to_string("England/data.geojson").unwrap(), original);
	}

	#[test]
	fn translating_in_a_missing_file_is_an_error() {
		let mut fs = MemoryFilesystem::from_files(vec![]);
		let reporter = MemoryReporter::new();
		let mut editor = PlaceEditor::new(&mut fs, &reporter);
		assert!(editor.set_translation("Nowhere/Town", "fr", "Ville").is_err());
	}

	#[test]
	fn ensure_feature_is_idempotent() {
		let mut fs = MemoryFilesystem::from_files(vec![]);
		editor_run(&mut fs, |e| e.ensure_feature("France/Paris"));
		let first = fs.read_to_string("France/data.geojson").unwrap();

		let reporter = editor_run(&mut fs, |e| e.ensure_feature("France/Paris"));
		assert!(!reporter.contains("creating France/Paris"));
		assert_eq!(fs.read_to_string("France/data.geojson").unwrap(), first);
	}
}
