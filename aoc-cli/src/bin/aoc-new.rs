//! `aoc-new` - scaffold a new Advent of Code day

use aoc_cli::cli::NewArgs;
use aoc_cli::config::ScaffoldConfig;
use aoc_cli::error::CliError;
use aoc_cli::logging;
use aoc_cli::scaffold::Scaffolder;
use clap::Parser;

fn main() {
    logging::init();
    let args = NewArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: NewArgs) -> Result<(), CliError> {
    let config = ScaffoldConfig::from_args(args)?;

    for artifact in Scaffolder::from_config(&config)?.scaffold(config.year, config.day)? {
        println!("{}", artifact);
    }

    println!();
    println!("Ready to solve! Run with:");
    println!("  aoc {} {}", config.year, config.day);
    Ok(())
}
