//! A filesystem backend rooted at a local directory.

use super::{FsEntry, Filesystem, entry::join};
use anyhow::{Context, Result, ensure};
use log::trace;
use std::{
	fs,
	path::{Path, PathBuf},
};

/// A `Filesystem` over a directory on disk, e.g. the `data/` tree of the
/// geodata repository.
#[derive(Debug)]
pub struct DiskFilesystem {
	root: PathBuf,
}

impl DiskFilesystem {
	/// Open a store rooted at `root`, which must be an existing directory.
	pub fn open(root: &Path) -> Result<DiskFilesystem> {
		ensure!(root.is_dir(), "'{}' must be an existing directory", root.display());
		Ok(DiskFilesystem { root: root.to_path_buf() })
	}

	/// Open a store rooted at `root`, creating the directory if needed.
	/// Used for export destinations.
	pub fn create(root: &Path) -> Result<DiskFilesystem> {
		fs::create_dir_all(root).with_context(|| format!("failed to create '{}'", root.display()))?;
		Self::open(root)
	}

	fn resolve(&self, path: &str) -> PathBuf {
		let mut result = self.root.clone();
		for segment in path.split('/').filter(|s| !s.is_empty()) {
			result.push(segment);
		}
		result
	}

	fn list_recursive(&self, dir: &str, deep: bool, result: &mut Vec<FsEntry>) -> Result<()> {
		let absolute = self.resolve(dir);
		for item in fs::read_dir(&absolute).with_context(|| format!("failed to list '{}'", absolute.display()))? {
			let item = item?;
			let name = item.file_name().to_string_lossy().into_owned();
			let path = join(dir, &name);
			let is_dir = item.file_type()?.is_dir();
			result.push(FsEntry::new(path.clone(), is_dir));
			if is_dir && deep {
				self.list_recursive(&path, deep, result)?;
			}
		}
		Ok(())
	}
}

impl Filesystem for DiskFilesystem {
	fn read(&self, path: &str) -> Result<Vec<u8>> {
		let absolute = self.resolve(path);
		fs::read(&absolute).with_context(|| format!("failed to read '{}'", absolute.display()))
	}

	fn write(&mut self, path: &str, contents: &[u8]) -> Result<()> {
		let absolute = self.resolve(path);
		trace!("writing {} bytes to '{}'", contents.len(), absolute.display());
		if let Some(parent) = absolute.parent() {
			fs::create_dir_all(parent).with_context(|| format!("failed to create '{}'", parent.display()))?;
		}
		fs::write(&absolute, contents).with_context(|| format!("failed to write '{}'", absolute.display()))
	}

	fn has(&self, path: &str) -> bool {
		self.resolve(path).is_file()
	}

	fn list(&self, path: &str, deep: bool) -> Result<Vec<FsEntry>> {
		let mut entries = Vec::new();
		self.list_recursive(path, deep, &mut entries)?;
		entries.sort();
		Ok(entries)
	}
}
