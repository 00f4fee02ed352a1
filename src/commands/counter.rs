//! tierlabel counter コマンド

use crate::counter::Counter;
use crate::error::Result;
use crate::output::debug;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Initial value
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// Number of increments to apply
    #[arg(long, default_value_t = 1)]
    pub times: u64,
}

pub fn run(args: Args, verbose: bool) -> Result<()> {
    let mut counter = Counter::new(args.start);

    for _ in 0..args.times {
        let count = counter.increment()?;
        debug(verbose, format_args!("count = {count}"));
    }

    println!("{}", counter.count());
    Ok(())
}
