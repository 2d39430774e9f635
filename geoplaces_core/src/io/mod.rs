//! Filesystem abstraction consumed by the geodata core.
//!
//! All paths are `/`-delimited and relative to the store root; the empty
//! string names the root itself. Listings are deterministic (sorted by
//! path), so every tree walk visits entries in the same order.

mod disk;
mod entry;
mod filesystem;
mod memory;

pub use disk::DiskFilesystem;
pub use entry::{FsEntry, basename, dirname, join};
pub use filesystem::Filesystem;
pub use memory::MemoryFilesystem;
