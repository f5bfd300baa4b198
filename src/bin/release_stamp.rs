//! release-stamp - stamp the _UNRELEASED_ changelog marker with a release time.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pkgrel::stamp::stamp_release;

/// Replace _UNRELEASED_ in a changelog with the release timestamp.
///
/// Honors SOURCE_DATE_EPOCH for reproducible builds; prints the unix epoch
/// of the release time on success.
#[derive(Parser, Debug)]
#[command(name = "release-stamp")]
#[command(about = "Replace _UNRELEASED_ in changelog with release timestamp")]
#[command(version)]
struct Cli {
    /// Path to changelog file
    file: PathBuf,

    /// Do not modify file, only print resulting timestamp
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    pkgrel::init_tracing();
    let cli = Cli::parse();

    match stamp_release(&cli.file, cli.dry_run) {
        Ok(epoch) => {
            println!("{}", epoch);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
