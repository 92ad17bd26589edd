use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use wx2tt::ConvertError;
use wx2tt::convert::Converter;
use wx2tt::rules::RuleTable;

#[derive(Parser)]
#[command(name = "wx2tt")]
#[command(
	author,
	version,
	about = "Convert a WeChat mini-program source tree into a ByteDance mini-program tree"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Source directory; the converted copy is written beside it as <SOURCE_DIR>_tt
	#[arg(value_name = "SOURCE_DIR")]
	source: PathBuf,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if let Err(e) = wx2tt::logging::init() {
		eprintln!("Warning: failed to initialize logging: {e}");
	}

	match run(&cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> Result<ExitCode> {
	let converter = match Converter::new(&cli.source, RuleTable::default()) {
		Ok(converter) => converter,
		Err(ConvertError::SourceNotFound { path }) => {
			println!("Source directory does not exist: {}", path.display());
			return Ok(ExitCode::FAILURE);
		}
		Err(e) => return Err(e).context("Invalid source directory"),
	};

	let copied = converter.copy_tree().context("Error copying directory")?;
	println!(
		"Copied {} files in {} directories to {}",
		copied.files,
		copied.directories,
		converter.destination().display()
	);

	let renamed = converter.rename_files().context("Error renaming files")?;
	println!(
		"File renaming completed successfully ({} renamed).",
		renamed.renamed
	);

	let rewritten = converter.rewrite_files().context("Error replacing content")?;
	println!(
		"Text replacement completed successfully ({} of {} files changed).",
		rewritten.rewritten, rewritten.scanned
	);

	println!("File conversion completed successfully.");
	Ok(ExitCode::SUCCESS)
}
