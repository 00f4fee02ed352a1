use crate::cli::{Cli, Command};
use crate::error::Result;

pub mod classify;
pub mod counter;
pub mod number;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Classify(args) => classify::run(args, cli.verbose),
        Command::Number(args) => number::run(args, cli.verbose),
        Command::Counter(args) => counter::run(args, cli.verbose),
    }
}
