//! Thin CLI entry point: parse flags, install logging, run the pipeline,
//! translate the result into a process exit code.

use clap::Parser;
use pcap_diff::cli::Cli;
use pcap_diff::logging;
use pcap_diff::orchestrator;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match orchestrator::run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::from(2)
        }
    }
}
