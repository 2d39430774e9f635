//! The three repair passes that keep the place tree consistent.
//!
//! Pass 1 reports file and directory names outside the portable character
//! set. Pass 2 synthesizes missing ancestor records so every directory
//! carrying data appears in its parent's `data.geojson`. Pass 3 rewrites
//! every `data.geojson` into canonical form. The passes are independent
//! and idempotent; running the engine twice changes nothing the second
//! time.
//!
//! Per-file failures are reported and the walk continues. Duplicate
//! feature ids are never auto-repaired: the affected file is reported and
//! left untouched.

use crate::error::GeodataError;
use crate::format::format_collection;
use crate::model::{DATA_FILE, PlaceCollection, PlaceFeature};
use crate::walk::{data_files, directories_with_data, walk_tree};
use anyhow::Result;
use geoplaces_core::io::{Filesystem, basename, dirname, join};
use geoplaces_core::report::Reporter;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
	// The tree doubles as a key-value store keyed by feature id, so names
	// must survive any filesystem and any URL encoder.
	static ref PORTABLE_NAME: Regex = Regex::new(r"^[A-Za-z ().'-]+$").unwrap();
}

/// Runs the repair passes against one place tree.
pub struct RepairEngine<'a> {
	reporter: &'a dyn Reporter,
}

impl<'a> RepairEngine<'a> {
	pub fn new(reporter: &'a dyn Reporter) -> Self {
		Self { reporter }
	}

	/// Run all three passes in order over the whole tree.
	pub fn run(&self, fs: &mut dyn Filesystem) -> Result<()> {
		info!("scanning for non-portable names");
		self.scan_invalid_names(fs)?;
		info!("synthesizing missing ancestor records");
		self.add_missing_records(fs)?;
		info!("canonicalizing data files");
		self.canonicalize_tree(fs)?;
		Ok(())
	}

	/// Pass 1: report every entry whose base name falls outside
	/// `[A-Za-z ().'-]`. Report only, never rename.
	pub fn scan_invalid_names(&self, fs: &dyn Filesystem) -> Result<()> {
		for entry in walk_tree(fs)? {
			if !PORTABLE_NAME.is_match(entry.basename()) {
				self
					.reporter
					.report(&format!("{} is not written using ASCII characters", entry.path));
			}
		}
		Ok(())
	}

	/// Pass 2: for every directory carrying data, make sure its parent's
	/// `data.geojson` records it.
	///
	/// Writing a parent file makes the parent itself a directory carrying
	/// data, so parents are queued as they appear and the invariant holds
	/// transitively up to the root after a single run.
	pub fn add_missing_records(&self, fs: &mut dyn Filesystem) -> Result<()> {
		let mut pending = directories_with_data(fs)?;
		pending.sort_by_key(|directory| std::cmp::Reverse(directory.matches('/').count()));
		let mut seen: BTreeSet<String> = pending.iter().cloned().collect();

		let mut index = 0;
		while index < pending.len() {
			let directory = pending[index].clone();
			index += 1;

			if let Err(error) = self.ensure_parent_record(fs, &directory) {
				self.reporter.report(&error.to_string());
				continue;
			}

			let parent = dirname(&directory);
			if !parent.is_empty() && seen.insert(parent.to_string()) {
				pending.push(parent.to_string());
			}
		}
		Ok(())
	}

	fn ensure_parent_record(&self, fs: &mut dyn Filesystem, directory: &str) -> Result<(), GeodataError> {
		let name = basename(directory);
		let parent_file = join(dirname(directory), DATA_FILE);

		let mut collection = if fs.has(&parent_file) {
			let text = fs
				.read_to_string(&parent_file)
				.map_err(|error| GeodataError::io(&parent_file, error))?;
			PlaceCollection::parse(&text).map_err(|error| GeodataError::parse(&parent_file, error))?
		} else {
			PlaceCollection::new()
		};

		if collection.contains_id(name) {
			debug!("'{name}' already recorded in '{parent_file}'");
			return Ok(());
		}

		self.reporter.report(&format!("adding '{name}' to {parent_file}"));
		collection.push(PlaceFeature::stub(name));
		fs.write(&parent_file, format_collection(&collection).as_bytes())
			.map_err(|error| GeodataError::io(&parent_file, error))?;
		Ok(())
	}

	/// Pass 3: rewrite every `data.geojson` into canonical form.
	///
	/// Files that fail to parse are reported and skipped. Files with a
	/// duplicate feature id are reported and left byte-for-byte unmodified.
	pub fn canonicalize_tree(&self, fs: &mut dyn Filesystem) -> Result<()> {
		for path in data_files(fs)? {
			if let Err(error) = self.canonicalize_file(fs, &path) {
				self.reporter.report(&error.to_string());
			}
		}
		Ok(())
	}

	fn canonicalize_file(&self, fs: &mut dyn Filesystem, path: &str) -> Result<(), GeodataError> {
		let text = fs
			.read_to_string(path)
			.map_err(|error| GeodataError::io(path, error))?;
		let mut collection =
			PlaceCollection::parse(&text).map_err(|error| GeodataError::parse(path, error))?;

		if let Some(id) = collection.duplicate_id() {
			return Err(GeodataError::DuplicateId {
				path: path.to_string(),
				id: id.to_string(),
			});
		}

		collection.canonicalize();
		let canonical = format_collection(&collection);
		if canonical != text {
			debug!("rewriting '{path}'");
			fs.write(path, canonical.as_bytes())
				.map_err(|error| GeodataError::io(path, error))?;
		}
		Ok(())
	}
}
