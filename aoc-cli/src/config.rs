//! Configuration resolution from CLI args

use crate::cli::{NewArgs, RunArgs};
use crate::error::CliError;
use crate::input::InputSource;
use crate::layout;
use std::path::{Path, PathBuf};

/// Resolved runner configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub year: u16,
    pub day: u8,
    /// Part filter (None = all parts)
    pub part: Option<u8>,
    pub input: InputSource,
    /// Whether to print solve timings
    pub time: bool,
    /// Tags a solver must carry to be registered
    pub tags: Vec<String>,
}

impl RunConfig {
    /// Build config from CLI args, resolving the input source
    pub fn from_args(args: RunArgs) -> Result<Self, CliError> {
        layout::validate_year_day(args.year, args.day)?;

        let input = match args.input.as_deref() {
            Some("-") => InputSource::Stdin,
            Some(path) if !path.is_empty() => InputSource::File(expand_tilde(Path::new(path))),
            _ => InputSource::Default {
                path: layout::default_input_path(
                    &expand_tilde(&args.inputs_dir),
                    args.year,
                    args.day,
                ),
                year: args.year,
                day: args.day,
            },
        };

        Ok(RunConfig {
            year: args.year,
            day: args.day,
            part: args.part,
            input,
            time: args.time,
            tags: args.tags,
        })
    }
}

/// Resolved scaffolding configuration
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub year: u16,
    pub day: u8,
    pub solutions_dir: PathBuf,
    pub inputs_dir: PathBuf,
}

impl ScaffoldConfig {
    /// Build config from CLI args
    pub fn from_args(args: NewArgs) -> Result<Self, CliError> {
        layout::validate_year_day(args.year, args.day)?;

        Ok(ScaffoldConfig {
            year: args.year,
            day: args.day,
            solutions_dir: expand_tilde(&args.solutions_dir),
            inputs_dir: expand_tilde(&args.inputs_dir),
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}
