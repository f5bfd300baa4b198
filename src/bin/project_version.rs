//! project-version - extract the project version from a build configuration.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use pkgrel::version::extract_project_version;

/// Extract the project(... VERSION x.y.z ...) version from stdin.
#[derive(Parser, Debug)]
#[command(name = "project-version")]
#[command(about = "Extract the project version from a build configuration on stdin")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    pkgrel::init_tracing();
    let _cli = Cli::parse();

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        return ExitCode::FAILURE;
    }

    match extract_project_version(&input) {
        Ok(version) => {
            println!("{}", version);
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
