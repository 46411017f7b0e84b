//! Boxtable - render delimited text as a box-drawing table.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use boxtable_cli::{Args, run, setup_logging};

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(&args.log_level, args.json_logs);

    if let Err(e) = run(&args) {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
