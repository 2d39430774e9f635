use anyhow::{Context, Result, bail, ensure};
use geoplaces_core::{
	io::DiskFilesystem,
	report::{ConsoleReporter, Reporter},
};
use geoplaces_geodata::{
	angle::{parse_latitude, parse_longitude},
	place::PlaceEditor,
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// CSV file in webtrees/googlemap format: level;place1;..;place5;longitude;latitude
	#[arg()]
	file: Vec<PathBuf>,

	/// import a single place instead of CSV files, e.g. "England/London"
	#[arg(long, requires = "longitude", requires = "latitude", conflicts_with = "file")]
	place: Option<String>,

	/// longitude of --place, e.g. "W0.1" or "-0.1"
	#[arg(long, requires = "place")]
	longitude: Option<String>,

	/// latitude of --place, e.g. "N51.5" or "51°30′"
	#[arg(long, requires = "place")]
	latitude: Option<String>,

	/// field delimiter, comma or semicolon
	#[arg(long, default_value = ";")]
	delimiter: char,

	/// root of the place database
	#[arg(long, default_value = "data")]
	directory: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	ensure!(arguments.delimiter.is_ascii(), "the delimiter must be an ASCII character");

	let mut fs = DiskFilesystem::open(&arguments.directory)?;
	let reporter = ConsoleReporter::new();
	let mut editor = PlaceEditor::new(&mut fs, &reporter);

	if let Some(place) = &arguments.place {
		let longitude = parse_longitude(arguments.longitude.as_deref().unwrap_or_default())?;
		let latitude = parse_latitude(arguments.latitude.as_deref().unwrap_or_default())?;
		return editor.import_coordinates(place, longitude, latitude);
	}

	if arguments.file.is_empty() {
		bail!("nothing to import: give CSV files or --place with --longitude and --latitude");
	}

	for file in &arguments.file {
		let reader = csv::ReaderBuilder::new()
			.delimiter(arguments.delimiter as u8)
			.has_headers(true)
			.flexible(true)
			.from_path(file)
			.with_context(|| format!("cannot open '{}'", file.display()))?;
		import_reader(&mut editor, &reporter, reader)?;
	}
	Ok(())
}

/// Import every data row of one CSV source. Bad rows are reported through
/// the sink and skipped; only I/O-level CSV errors abort.
fn import_reader<R: std::io::Read>(
	editor: &mut PlaceEditor,
	reporter: &dyn Reporter,
	mut reader: csv::Reader<R>,
) -> Result<()> {
	for (index, record) in reader.records().enumerate() {
		let line = index + 2; // one-based, after the header
		let record = record.with_context(|| format!("bad CSV record at line {line}"))?;
		if let Err(error) = import_record(editor, &record) {
			reporter.report(&format!("error at line {line}: {error}"));
		}
	}
	Ok(())
}

/// One data row: a level, up to five place-name columns, and a
/// hemisphere-letter coordinate pair.
fn import_record(editor: &mut PlaceEditor, record: &csv::StringRecord) -> Result<()> {
	let level: usize = record
		.get(0)
		.context("missing level column")?
		.trim()
		.parse()
		.context("the level is not a number")?;

	let place_parts: Vec<&str> = (1..=5)
		.filter_map(|column| record.get(column))
		.filter(|part| !part.is_empty())
		.collect();
	ensure!(
		level + 1 == place_parts.len(),
		"level {level} does not match {} place names",
		place_parts.len()
	);

	let longitude = parse_longitude(record.get(6).context("missing longitude column")?)?;
	let latitude = parse_latitude(record.get(7).context("missing latitude column")?)?;

	editor.import_coordinates(&place_parts.join("/"), longitude, latitude)
}
