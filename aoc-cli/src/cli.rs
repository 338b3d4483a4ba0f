//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code solver", version)]
pub struct RunArgs {
    /// Event year, e.g. 2025
    #[arg(value_parser = clap::value_parser!(u16).range(2015..))]
    pub year: u16,

    /// Day number (1-25)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input file; `-` reads stdin. Defaults to <inputs-dir>/<year>/dayDD.txt
    #[arg(short, long)]
    pub input: Option<String>,

    /// Print the solve time of each part
    #[arg(short, long)]
    pub time: bool,

    /// Root directory of default input files
    #[arg(long, default_value = crate::layout::DEFAULT_INPUTS_DIR)]
    pub inputs_dir: PathBuf,

    /// Only consider solvers carrying all of these tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

/// Create the files for a new Advent of Code day
#[derive(Parser, Debug)]
#[command(name = "aoc-new", about = "Scaffold a new Advent of Code day", version)]
pub struct NewArgs {
    /// Event year, e.g. 2025
    #[arg(value_parser = clap::value_parser!(u16).range(2015..))]
    pub year: u16,

    /// Day number (1-25)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Solutions crate to add the day module and test to
    #[arg(long, default_value = crate::layout::DEFAULT_SOLUTIONS_DIR)]
    pub solutions_dir: PathBuf,

    /// Root directory of input files
    #[arg(long, default_value = crate::layout::DEFAULT_INPUTS_DIR)]
    pub inputs_dir: PathBuf,
}
