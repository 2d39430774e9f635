use anyhow::Result;
use geoplaces_core::{io::DiskFilesystem, report::ConsoleReporter};
use geoplaces_geodata::place::PlaceEditor;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// name of the place (in English), e.g. "England/London"
	#[arg()]
	place: String,

	/// language code, e.g. "fr"
	#[arg()]
	language: String,

	/// e.g. "Londres" (empty deletes an existing translation)
	#[arg()]
	translation: String,

	/// root of the place database
	#[arg(long, default_value = "data")]
	directory: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut fs = DiskFilesystem::open(&arguments.directory)?;
	let reporter = ConsoleReporter::new();
	PlaceEditor::new(&mut fs, &reporter).set_translation(
		&arguments.place,
		&arguments.language,
		&arguments.translation,
	)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use geoplaces_core::io::{DiskFilesystem, Filesystem};
	use std::fs;

	#[test]
	fn adds_a_translation() -> Result<()> {
		let data = tempfile::tempdir()?;
		fs::create_dir_all(data.path().join("England"))?;
		fs::write(
			data.path().join("England/data.geojson"),
			r#"{"features": [{"id": "London", "type": "Feature"}]}"#,
		)?;

		run_command(vec![
			"geoplaces",
			"translate",
			"England/London",
			"fr",
			"Londres",
			"--directory",
			data.path().to_str().unwrap(),
		])?;

		let store = DiskFilesystem::open(data.path())?;
		assert!(store.read_to_string("England/data.geojson")?.contains("\"fr\": \"Londres\""));
		Ok(())
	}

	#[test]
	fn missing_data_file_fails() {
		let data = tempfile::tempdir().unwrap();
		assert!(
			run_command(vec![
				"geoplaces",
				"translate",
				"Nowhere/Town",
				"fr",
				"Ville",
				"--directory",
				data.path().to_str().unwrap(),
			])
			.is_err()
		);
	}
}
