//! The error taxonomy of the geodata core.
//!
//! Repair passes report these per file and continue with the next one;
//! only the mutators propagate them to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeodataError {
	/// A file is not valid GeoJSON. Tolerated where the model allows
	/// defaulting (a missing `features` key), fatal for that file
	/// otherwise.
	#[error("failed to parse '{path}': {source}")]
	Parse {
		path: String,
		#[source]
		source: anyhow::Error,
	},

	/// Two sibling features share an id. Not auto-repairable; the file is
	/// left unmodified and must be fixed by hand.
	#[error("duplicate feature id '{id}' in '{path}'")]
	DuplicateId { path: String, id: String },

	/// The underlying storage failed.
	#[error("storage error on '{path}': {source}")]
	Io {
		path: String,
		#[source]
		source: anyhow::Error,
	},
}

impl GeodataError {
	pub fn parse(path: &str, source: anyhow::Error) -> Self {
		Self::Parse {
			path: path.to_string(),
			source,
		}
	}

	pub fn io(path: &str, source: anyhow::Error) -> Self {
		Self::Io {
			path: path.to_string(),
			source,
		}
	}
}
