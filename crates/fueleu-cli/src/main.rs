//! FuelEU Dashboard - compliance balance, banking and pooling for ship routes
//!
//! A CLI tool over a file-backed store of routes, bank entries and pools.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
