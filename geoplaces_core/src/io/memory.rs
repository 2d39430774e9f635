//! An in-memory filesystem backend.

use super::{FsEntry, Filesystem, entry::dirname};
use anyhow::{Result, bail};
use std::collections::{BTreeMap, BTreeSet};

/// A `Filesystem` over a `BTreeMap`, for tests and dry runs.
///
/// Directories are implied by the file paths stored in the map; an empty
/// directory cannot exist, which matches what version control would track
/// for the on-disk data tree.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
	files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFilesystem {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a filesystem from `(path, contents)` pairs.
	#[must_use]
	pub fn from_files(files: Vec<(&str, &str)>) -> Self {
		Self {
			files: files
				.into_iter()
				.map(|(path, contents)| (path.to_string(), contents.as_bytes().to_vec()))
				.collect(),
		}
	}

	/// Every directory implied by the stored file paths.
	fn directories(&self) -> BTreeSet<String> {
		let mut result = BTreeSet::new();
		for path in self.files.keys() {
			let mut dir = dirname(path);
			while !dir.is_empty() {
				result.insert(dir.to_string());
				dir = dirname(dir);
			}
		}
		result
	}
}

impl Filesystem for MemoryFilesystem {
	fn read(&self, path: &str) -> Result<Vec<u8>> {
		match self.files.get(path) {
			Some(contents) => Ok(contents.clone()),
			None => bail!("file '{path}' does not exist"),
		}
	}

	fn write(&mut self, path: &str, contents: &[u8]) -> Result<()> {
		self.files.insert(path.to_string(), contents.to_vec());
		Ok(())
	}

	fn has(&self, path: &str) -> bool {
		self.files.contains_key(path)
	}

	fn list(&self, path: &str, deep: bool) -> Result<Vec<FsEntry>> {
		let prefix = if path.is_empty() {
			String::new()
		} else {
			format!("{path}/")
		};

		let below = |candidate: &str| {
			candidate.starts_with(&prefix)
				&& (deep || !candidate[prefix.len()..].contains('/'))
				&& candidate != path
		};

		let mut entries: Vec<FsEntry> = self
			.directories()
			.into_iter()
			.filter(|dir| below(dir))
			.map(|dir| FsEntry::new(dir, true))
			.chain(
				self
					.files
					.keys()
					.filter(|file| below(file))
					.map(|file| FsEntry::new(file.clone(), false)),
			)
			.collect();
		entries.sort();
		Ok(entries)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> MemoryFilesystem {
		MemoryFilesystem::from_files(vec![
			("data.geojson", "{}"),
			("England/data.geojson", "{}"),
			("England/London/flag.svg", "<svg/>"),
			("France/data.geojson", "{}"),
		])
	}

	#[test]
	fn read_write_has() -> Result<()> {
		let mut fs = MemoryFilesystem::new();
		assert!(!fs.has("a/b"));
		assert!(fs.read("a/b").is_err());

		fs.write("a/b", b"contents")?;
		assert!(fs.has("a/b"));
		assert_eq!(fs.read("a/b")?, b"contents");
		assert_eq!(fs.read_to_string("a/b")?, "contents");

		fs.write("a/b", b"replaced")?;
		assert_eq!(fs.read("a/b")?, b"replaced");
		Ok(())
	}

	#[test]
	fn deep_listing_includes_implied_directories() -> Result<()> {
		let fs = sample();
		let paths: Vec<(String, bool)> = fs
			.list("", true)?
			.into_iter()
			.map(|e| (e.path, e.is_dir))
			.collect();

		assert_eq!(
			paths,
			vec![
				("England".to_string(), true),
				("England/London".to_string(), true),
				("England/London/flag.svg".to_string(), false),
				("England/data.geojson".to_string(), false),
				("France".to_string(), true),
				("France/data.geojson".to_string(), false),
				("data.geojson".to_string(), false),
			]
		);
		Ok(())
	}

	#[test]
	fn shallow_listing() -> Result<()> {
		let fs = sample();
		let paths: Vec<String> = fs.list("England", false)?.into_iter().map(|e| e.path).collect();
		assert_eq!(paths, vec!["England/London", "England/data.geojson"]);
		Ok(())
	}
}
