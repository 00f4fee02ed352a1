mod cli;
mod commands;
mod config;
mod counter;
mod env;
mod error;
mod instance;
mod label;
mod number;
mod output;

use clap::Parser;
use config::VERBOSE_ENV;
use env::EnvVar;
use error::{ErrorFormatter, RichError};

fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;

    if let Err(err) = commands::dispatch(cli) {
        let verbose = verbose || EnvVar::flag(VERBOSE_ENV).ok().flatten().unwrap_or(false);
        let formatter = ErrorFormatter::new(verbose);
        eprintln!("{}", formatter.format(&RichError::from(err)));
        std::process::exit(1);
    }
}
