//! Recyclab - recyclability laboratory test calculations
//!
//! A CLI front end to the lab calculation engine: evaluates measurement
//! sheets and prints or exports the derived quality metrics.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
