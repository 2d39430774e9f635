//! Export of flag assets under translated place names.
//!
//! The webtrees consumer expects flags keyed by the place path in the
//! target language, e.g. `places/flags/Angleterre/Londres.svg` for
//! `England/London` with `--language fr`. The exporter first builds the
//! translated path for every place, walking parents before children so a
//! child can extend its parent's translated path, then copies each
//! `flag.svg` into the destination under its translated name.

use crate::model::{DATA_FILE, FLAG_FILE, PlaceCollection};
use crate::walk::walk_tree;
use anyhow::Result;
use geoplaces_core::io::{Filesystem, dirname, join};
use geoplaces_core::report::Reporter;
use std::collections::BTreeMap;

/// Copies flags into a destination tree, renamed into one target language.
pub struct Exporter<'a> {
	reporter: &'a dyn Reporter,
}

impl<'a> Exporter<'a> {
	pub fn new(reporter: &'a dyn Reporter) -> Self {
		Self { reporter }
	}

	/// Export every `flag.svg` whose source path starts with `prefix`
	/// (empty prefix exports everything) into
	/// `places/flags/<translated path>.svg` in the destination.
	pub fn export_flags(
		&self,
		source: &dyn Filesystem,
		destination: &mut dyn Filesystem,
		language: &str,
		prefix: &str,
	) -> Result<()> {
		let translations = self.translation_map(source, language)?;

		for entry in walk_tree(source)? {
			if entry.is_dir || entry.basename() != FLAG_FILE || !entry.path.starts_with(prefix) {
				continue;
			}
			let Some(translated) = translations.get(entry.dirname()) else {
				self
					.reporter
					.report(&format!("{} has no place record, skipping its flag", entry.dirname()));
				continue;
			};

			let target = format!("places/flags/{translated}.svg");
			self.reporter.report(&format!("creating {target}"));
			destination.write(&target, &source.read(&entry.path)?)?;
		}
		Ok(())
	}

	/// Map every place path to its path in `language`, falling back to the
	/// id segment-wise where no translation exists.
	pub fn translation_map(
		&self,
		source: &dyn Filesystem,
		language: &str,
	) -> Result<BTreeMap<String, String>> {
		let mut files: Vec<String> = walk_tree(source)?
			.into_iter()
			.filter(|entry| !entry.is_dir && entry.basename() == DATA_FILE)
			.map(|entry| entry.path)
			.collect();
		// Parents before children, so a child can extend its parent's
		// translated path.
		files.sort_by(|a, b| dirname(a).cmp(dirname(b)));

		let mut translations: BTreeMap<String, String> = BTreeMap::new();
		for file in files {
			let text = source.read_to_string(&file)?;
			let collection = match PlaceCollection::parse(&text) {
				Ok(collection) => collection,
				Err(error) => {
					self.reporter.report(&format!("failed to parse '{file}': {error}"));
					continue;
				}
			};

			let parent = dirname(&file);
			let translated_parent = translations.get(parent).cloned().unwrap_or_default();
			for feature in &collection.features {
				translations.insert(
					join(parent, &feature.id),
					join(&translated_parent, feature.translated_name(language)),
				);
			}
		}
		Ok(translations)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoplaces_core::io::MemoryFilesystem;
	use geoplaces_core::report::MemoryReporter;

	fn sample_source() -> MemoryFilesystem {
		MemoryFilesystem::from_files(vec![
			(
				"data.geojson",
				r#"{"features": [
					{"id": "England", "properties": {"fr": "Angleterre"}},
					{"id": "France"}
				]}"#,
			),
			(
				"England/data.geojson",
				r#"{"features": [{"id": "London", "properties": {"fr": "Londres"}}]}"#,
			),
			("England/flag.svg", "<svg>england</svg>"),
			("England/London/flag.svg", "<svg>london</svg>"),
			("France/flag.svg", "<svg>france</svg>"),
		])
	}

	#[test]
	fn translation_map_walks_parent_first() {
		let source = sample_source();
		let reporter = MemoryReporter::new();
		let translations = Exporter::new(&reporter).translation_map(&source, "fr").unwrap();

		assert_eq!(translations.get("England").unwrap(), "Angleterre");
		assert_eq!(translations.get("England/London").unwrap(), "Angleterre/Londres");
		// No translation: the id is used as-is.
		assert_eq!(translations.get("France").unwrap(), "France");
	}

	#[test]
	fn flags_land_under_translated_names() {
		let source = sample_source();
		let mut destination = MemoryFilesystem::from_files(vec![]);
		let reporter = MemoryReporter::new();
		Exporter::new(&reporter)
			.export_flags(&source, &mut destination, "fr", "")
			.unwrap();

		assert_eq!(
			destination.read_to_string("places/flags/Angleterre.svg").unwrap(),
			"<svg>england</svg>"
		);
		assert_eq!(
			destination.read_to_string("places/flags/Angleterre/Londres.svg").unwrap(),
			"<svg>london</svg>"
		);
		assert!(destination.has("places/flags/France.svg"));
	}

	#[test]
	fn prefix_limits_the_export() {
		let source = sample_source();
		let mut destination = MemoryFilesystem::from_files(vec![]);
		let reporter = MemoryReporter::new();
		Exporter::new(&reporter)
			.export_flags(&source, &mut destination, "fr", "England")
			.unwrap();

		assert!(destination.has("places/flags/Angleterre.svg"));
		assert!(!destination.has("places/flags/France.svg"));
	}

	#[test]
	fn unrecorded_directories_are_reported_and_skipped() {
		let source = MemoryFilesystem::from_files(vec![
			("data.geojson", r#"{"features": []}"#),
			("Atlantis/flag.svg", "<svg/>"),
		]);
		let mut destination = MemoryFilesystem::from_files(vec![]);
		let reporter = MemoryReporter::new();
		Exporter::new(&reporter)
			.export_flags(&source, &mut destination, "en", "")
			.unwrap();

		assert!(reporter.contains("Atlantis has no place record"));
		assert!(destination.list("", true).unwrap().is_empty());
	}
}
