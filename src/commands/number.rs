//! tierlabel number コマンド

use crate::error::Result;
use crate::number::{give_me_a_number, CoinFlip};
use crate::output::debug;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Fix the outcome of the yes/no check instead of flipping a coin
    #[arg(long)]
    pub force: Option<bool>,
}

pub fn run(args: Args, verbose: bool) -> Result<()> {
    let number = match args.force {
        Some(answer) => {
            debug(verbose, format_args!("check forced to {answer}"));
            give_me_a_number(&move || answer)
        }
        None => give_me_a_number(&CoinFlip),
    };

    println!("{number}");
    Ok(())
}
