//! Line-by-line progress and error narration.
//!
//! Commands narrate what they touch, one human-readable line per event.
//! The sink is passed explicitly to every component that reports, so
//! library code never writes to the terminal on its own.

use std::sync::Mutex;

/// A sink for progress and error lines.
pub trait Reporter {
	fn report(&self, message: &str);
}

/// Prints every line to stdout. Used by the CLI.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
	#[must_use]
	pub fn new() -> Self {
		Self
	}
}

impl Reporter for ConsoleReporter {
	fn report(&self, message: &str) {
		println!("{message}");
	}
}

/// Collects every line in memory. Used by tests to assert on narration.
#[derive(Debug, Default)]
pub struct MemoryReporter {
	lines: Mutex<Vec<String>>,
}

impl MemoryReporter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// All lines reported so far.
	pub fn lines(&self) -> Vec<String> {
		self.lines.lock().unwrap().clone()
	}

	/// Whether any reported line contains `needle`.
	pub fn contains(&self, needle: &str) -> bool {
		self.lines.lock().unwrap().iter().any(|line| line.contains(needle))
	}
}

impl Reporter for MemoryReporter {
	fn report(&self, message: &str) {
		self.lines.lock().unwrap().push(message.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_reporter_collects_lines() {
		let reporter = MemoryReporter::new();
		reporter.report("first");
		reporter.report("second line");

		assert_eq!(reporter.lines(), vec!["first", "second line"]);
		assert!(reporter.contains("second"));
		assert!(!reporter.contains("third"));
	}

	#[test]
	fn reporter_is_object_safe() {
		let reporter = MemoryReporter::new();
		let sink: &dyn Reporter = &reporter;
		sink.report("via trait object");
		assert!(reporter.contains("via trait object"));
	}
}
