mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Repair the place database: report bad names, add missing records, canonicalize files
	Repair(tools::repair::Subcommand),

	/// Import coordinates from webtrees/googlemap CSV files or for a single place
	Import(tools::import::Subcommand),

	/// Add or remove a translation of an existing place name
	Translate(tools::translate::Subcommand),

	/// Export flags under translated place names
	Export(tools::export::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Repair(arguments) => tools::repair::run(arguments),
		Commands::Import(arguments) => tools::import::run(arguments),
		Commands::Translate(arguments) => tools::translate::run(arguments),
		Commands::Export(arguments) => tools::export::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geoplaces"]).unwrap_err().to_string();
		assert!(err.starts_with("A toolbox for maintaining a hierarchical GeoJSON database of place names."));
		assert!(err.contains("\nUsage: geoplaces [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geoplaces", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geoplaces "));
	}

	#[test]
	fn translate_subcommand() {
		let output = run_command(vec!["geoplaces", "translate"]).unwrap_err().to_string();
		assert!(output.starts_with("Add or remove a translation of an existing place name"));
	}

	#[test]
	fn import_subcommand() {
		let output = run_command(vec!["geoplaces", "import"]).unwrap_err().to_string();
		assert!(output.starts_with("Import coordinates from webtrees/googlemap CSV files or for a single place"));
	}
}
