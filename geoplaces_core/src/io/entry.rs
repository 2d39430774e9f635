//! A single entry of a filesystem listing.

/// One file or directory returned by [`Filesystem::list`](super::Filesystem::list).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FsEntry {
	pub path: String,
	pub is_dir: bool,
}

impl FsEntry {
	#[must_use]
	pub fn new(path: impl Into<String>, is_dir: bool) -> Self {
		Self {
			path: path.into(),
			is_dir,
		}
	}

	/// The last path segment.
	#[must_use]
	pub fn basename(&self) -> &str {
		basename(&self.path)
	}

	/// The path without its last segment; empty for top-level entries.
	#[must_use]
	pub fn dirname(&self) -> &str {
		dirname(&self.path)
	}
}

/// The last segment of a `/`-delimited path.
#[must_use]
pub fn basename(path: &str) -> &str {
	match path.rfind('/') {
		Some(index) => &path[index + 1..],
		None => path,
	}
}

/// Everything before the last segment; empty for top-level paths.
#[must_use]
pub fn dirname(path: &str) -> &str {
	match path.rfind('/') {
		Some(index) => &path[..index],
		None => "",
	}
}

/// Join a directory path and a file name, treating the empty string as root.
#[must_use]
pub fn join(dir: &str, name: &str) -> String {
	if dir.is_empty() {
		name.to_string()
	} else {
		format!("{dir}/{name}")
	}
}
