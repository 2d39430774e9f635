//! Byte-level iteration with peeking, used by the JSON parser.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::ByteIterator;
