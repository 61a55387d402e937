use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::command::CliCommand;

mod command;
mod print_error;
mod print_list;
mod run;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    init_tracing(cli.verbose);

    if cli.no_colors {
        anstream::ColorChoice::Never.write_global();
    }

    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error::print(&error, cli.print_debug);
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr, filtered by `RUST_LOG` unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
