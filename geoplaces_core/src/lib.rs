//! # geoplaces_core
//!
//! Domain-independent plumbing for the geoplaces toolbox:
//!
//! - a JSON value model with its own byte-level parser and stringifier,
//!   tuned for deterministic output (objects iterate their keys sorted),
//! - a filesystem abstraction with disk and in-memory backends,
//! - a reporting sink for line-by-line progress and error narration.

pub mod byte_iterator;
pub mod io;
pub mod json;
pub mod report;
