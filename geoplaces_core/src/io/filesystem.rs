//! The storage trait the geodata core reads and writes through.

use super::FsEntry;
use anyhow::{Context, Result};

/// A hierarchical store of files, addressed by `/`-delimited relative paths.
///
/// The core never touches `std::fs` directly; commands pick a backend
/// ([`DiskFilesystem`](super::DiskFilesystem) for the data tree,
/// [`MemoryFilesystem`](super::MemoryFilesystem) for tests).
pub trait Filesystem {
	/// Read the full contents of a file.
	fn read(&self, path: &str) -> Result<Vec<u8>>;

	/// Write a file, replacing any previous contents and creating missing
	/// parent directories.
	fn write(&mut self, path: &str, contents: &[u8]) -> Result<()>;

	/// Whether a file exists at `path`.
	fn has(&self, path: &str) -> bool;

	/// List the entries below `path` (`""` for the whole tree), sorted by
	/// path. With `deep`, the listing recurses; the listed directory itself
	/// is not included.
	fn list(&self, path: &str, deep: bool) -> Result<Vec<FsEntry>>;

	/// Read a file as UTF-8 text.
	fn read_to_string(&self, path: &str) -> Result<String> {
		String::from_utf8(self.read(path)?).with_context(|| format!("'{path}' is not valid UTF-8"))
	}
}
