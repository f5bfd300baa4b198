//! transcode - convert a changelog document to Debian or RPM format.

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use pkgrel::changelog::{parse_changelog, render_debian, render_rpm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Debian,
    Rpm,
}

/// Convert CHANGELOG.md to Debian or RPM format.
#[derive(Parser, Debug)]
#[command(name = "transcode")]
#[command(about = "Convert CHANGELOG.md to Debian or RPM format")]
#[command(version)]
struct Cli {
    /// Package name used in the generated changelog
    #[arg(long)]
    package: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Debian)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    pkgrel::init_tracing();
    let cli = Cli::parse();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read changelog from stdin")?;

    let records = parse_changelog(&input)?;

    let output = match cli.format {
        OutputFormat::Debian => render_debian(&records, &cli.package),
        OutputFormat::Rpm => render_rpm(&records),
    };

    print!("{}", output);
    Ok(())
}
