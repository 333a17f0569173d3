// mtfps-cli/src/main.rs
//
// Entry point for the `mtfps` binary.
//
// Responsibilities:
// - Parsing arguments (usage errors exit with status 1)
// - Setting up logging on stderr
// - Running the probe command and mapping any error to exit status 1

use clap::Parser;
use clap::error::ErrorKind;
use console::style;
use mtfps_cli::logging::init_logging;
use mtfps_cli::{Cli, run_probe};
use std::error::Error;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            // Ignore a failed write; we are exiting either way.
            let _ = e.print();
            process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run_probe(&cli) {
        if let Some(source) = e.source() {
            log::debug!("Caused by: {}", source);
        }
        eprintln!("{}", style(format!("Error: {}", e)).red().bold().for_stderr());
        process::exit(1);
    }
}
