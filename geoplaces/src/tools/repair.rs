use anyhow::Result;
use geoplaces_core::{io::DiskFilesystem, report::ConsoleReporter};
use geoplaces_geodata::repair::RepairEngine;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// root of the place database
	#[arg(default_value = "data")]
	directory: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut fs = DiskFilesystem::open(&arguments.directory)?;
	let reporter = ConsoleReporter::new();
	RepairEngine::new(&reporter).run(&mut fs)
}
