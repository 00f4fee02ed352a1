use clap::{Parser, Subcommand};

use crate::commands::{classify, counter, number};

#[derive(Debug, Parser)]
#[command(name = "tierlabel", version)]
#[command(about = "Tier label classifier CLI", long_about = None)]
pub struct Cli {
    /// Show diagnostics and detailed error reports (also TIERLABEL_VERBOSE)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Label instance descriptors by tier
    Classify(classify::Args),

    /// Print 42 or 23 depending on a yes/no check
    Number(number::Args),

    /// Count up from a start value
    Counter(counter::Args),
}
