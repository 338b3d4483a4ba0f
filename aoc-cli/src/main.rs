//! `aoc` - run one Advent of Code day

use aoc_cli::cli::RunArgs;
use aoc_cli::config::RunConfig;
use aoc_cli::error::CliError;
use aoc_cli::executor::Executor;
use aoc_cli::{build_registry, logging};
use clap::Parser;

fn main() {
    logging::init();
    let args = RunArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: RunArgs) -> Result<(), CliError> {
    let config = RunConfig::from_args(args)?;
    let registry = build_registry(&config.tags)?;

    let stdout = std::io::stdout();
    Executor::new(registry).run(&config, &mut stdout.lock())
}
