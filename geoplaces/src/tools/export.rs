use anyhow::Result;
use geoplaces_core::{io::DiskFilesystem, report::ConsoleReporter};
use geoplaces_geodata::export::Exporter;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// language code for the exported place names
	#[arg(long, default_value = "en")]
	language: String,

	/// export only places whose path begins with this prefix
	#[arg(long, default_value = "")]
	prefix: String,

	/// root of the place database
	#[arg(long, default_value = "data")]
	directory: PathBuf,

	/// destination directory; default is dist/places-<language>
	#[arg(long)]
	output: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let source = DiskFilesystem::open(&arguments.directory)?;
	let output = arguments
		.output
		.clone()
		.unwrap_or_else(|| PathBuf::from(format!("dist/places-{}", arguments.language)));
	let mut destination = DiskFilesystem::create(&output)?;

	let reporter = ConsoleReporter::new();
	Exporter::new(&reporter).export_flags(
		&source,
		&mut destination,
		&arguments.language,
		&arguments.prefix,
	)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use std::fs;

	#[test]
	fn exports_flags_under_translated_names() -> Result<()> {
		let data = tempfile::tempdir()?;
		let dist = tempfile::tempdir()?;
		fs::create_dir_all(data.path().join("England"))?;
		fs::write(
			data.path().join("data.geojson"),
			r#"{"features": [{"id": "England", "type": "Feature", "properties": {"fr": "Angleterre"}}]}"#,
		)?;
		fs::write(data.path().join("England/flag.svg"), "<svg/>")?;

		run_command(vec![
			"geoplaces",
			"export",
			"--language",
			"fr",
			"--directory",
			data.path().to_str().unwrap(),
			"--output",
			dist.path().to_str().unwrap(),
		])?;

		let flag = dist.path().join("places/flags/Angleterre.svg");
		assert_eq!(fs::read_to_string(flag)?, "<svg/>");
		Ok(())
	}
}
