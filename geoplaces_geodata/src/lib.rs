//! # geoplaces_geodata
//!
//! The domain core of the geoplaces toolbox: the GeoJSON place model, the
//! canonical formatter, the tree walker, the repair engine, and the place
//! mutators used by the import/translate commands.
//!
//! The data store is a directory hierarchy. Each directory holds one
//! `data.geojson` describing its immediate children, plus one subdirectory
//! per child feature, which may itself contain a nested `data.geojson` and
//! a `flag.svg`. The central invariant: every subdirectory carrying data
//! appears as a feature in its parent's `data.geojson`.

pub mod angle;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod place;
pub mod repair;
pub mod walk;

pub use error::GeodataError;
pub use model::{DATA_FILE, FLAG_FILE, PlaceCollection, PlaceFeature, PointGeometry};
