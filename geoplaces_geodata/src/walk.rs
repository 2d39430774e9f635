//! Deterministic enumeration of the place tree.
//!
//! Thin filters over [`Filesystem::list`]: the listing itself is already
//! sorted by path, so every helper here inherits a stable order and the
//! repair passes only re-order where they need a different one.

use crate::model::{DATA_FILE, FLAG_FILE};
use anyhow::Result;
use geoplaces_core::io::{Filesystem, FsEntry};
use std::collections::BTreeSet;

/// Every entry below the root, files and directories, exactly once.
pub fn walk_tree(fs: &dyn Filesystem) -> Result<Vec<FsEntry>> {
	fs.list("", true)
}

/// The paths of all `data.geojson` files in the tree, sorted by path.
pub fn data_files(fs: &dyn Filesystem) -> Result<Vec<String>> {
	Ok(walk_tree(fs)?
		.into_iter()
		.filter(|entry| !entry.is_dir && entry.basename() == DATA_FILE)
		.map(|entry| entry.path)
		.collect())
}

/// Directories that carry place data of their own, i.e. contain a
/// `data.geojson` or a `flag.svg`. Each such directory must be recorded as
/// a feature in its parent's file; the repair engine restores that
/// invariant. The root itself is never included.
pub fn directories_with_data(fs: &dyn Filesystem) -> Result<Vec<String>> {
	let mut directories = BTreeSet::new();
	for entry in walk_tree(fs)? {
		if entry.is_dir {
			continue;
		}
		let name = entry.basename();
		if name != DATA_FILE && name != FLAG_FILE {
			continue;
		}
		let directory = entry.dirname();
		if !directory.is_empty() {
			directories.insert(directory.to_string());
		}
	}
	Ok(directories.into_iter().collect())
}
