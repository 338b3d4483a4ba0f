//! Creates the files for a new day without touching anything that already exists

use crate::config::ScaffoldConfig;
use crate::error::CliError;
use crate::layout;
use minijinja::{Environment, context};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const DAY_TEMPLATE: &str = include_str!("templates/day.rs.jinja");
const TEST_TEMPLATE: &str = include_str!("templates/test.rs.jinja");

/// Whether an artifact was created by this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    Created,
    AlreadyExists,
}

/// One file, or one `pub mod` line inside a file, that a day needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    /// Module declared inside `path`; `None` for the file itself
    pub module: Option<String>,
    pub status: ArtifactStatus,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.status {
            ArtifactStatus::Created => "Created",
            ArtifactStatus::AlreadyExists => "Already exists",
        };
        match &self.module {
            Some(module) => write!(f, "{}: `pub mod {};` in {}", label, module, self.path.display()),
            None => write!(f, "{}: {}", label, self.path.display()),
        }
    }
}

/// Renders day templates and writes them under the solutions and inputs roots
pub struct Scaffolder {
    solutions_dir: PathBuf,
    inputs_dir: PathBuf,
    templates: Environment<'static>,
}

impl Scaffolder {
    pub fn new(solutions_dir: PathBuf, inputs_dir: PathBuf) -> Result<Self, CliError> {
        let mut templates = Environment::new();
        templates.set_keep_trailing_newline(true);
        templates.add_template("day", DAY_TEMPLATE)?;
        templates.add_template("test", TEST_TEMPLATE)?;
        Ok(Self {
            solutions_dir,
            inputs_dir,
            templates,
        })
    }

    pub fn from_config(config: &ScaffoldConfig) -> Result<Self, CliError> {
        Self::new(config.solutions_dir.clone(), config.inputs_dir.clone())
    }

    /// Ensure every artifact for `year`/`day` exists, in dependency order
    ///
    /// Files are only ever created, never rewritten; module declarations are
    /// appended to the parent `mod.rs` when missing.
    pub fn scaffold(&self, year: u16, day: u8) -> Result<Vec<Artifact>, CliError> {
        layout::validate_year_day(year, day)?;

        let year_module = layout::year_module_name(year);
        let day_module = layout::day_module_name(day);
        let solutions_mod = layout::solutions_mod_file(&self.solutions_dir);
        let year_mod = layout::year_mod_file(&self.solutions_dir, year);

        let day_source = self
            .templates
            .get_template("day")?
            .render(context! { year => year, day => day })?;
        let test_source = self.templates.get_template("test")?.render(context! {
            year => year,
            day => day,
            year_module => &year_module,
            day_module => &day_module,
        })?;

        Ok(vec![
            ensure_file(&solutions_mod, "")?,
            ensure_declared(&solutions_mod, &year_module)?,
            ensure_file(&year_mod, "")?,
            ensure_declared(&year_mod, &day_module)?,
            ensure_file(
                &layout::day_module_path(&self.solutions_dir, year, day),
                &day_source,
            )?,
            ensure_file(&layout::default_input_path(&self.inputs_dir, year, day), "")?,
            ensure_file(&layout::test_file_path(&self.solutions_dir, day), &test_source)?,
        ])
    }
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Scaffold {
        path: path.to_path_buf(),
        source,
    }
}

/// Create `path` with `contents` unless it already exists
fn ensure_file(path: &Path, contents: &str) -> Result<Artifact, CliError> {
    let artifact = |status| Artifact {
        path: path.to_path_buf(),
        module: None,
        status,
    };

    if path.exists() {
        return Ok(artifact(ArtifactStatus::AlreadyExists));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error(parent))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(artifact(ArtifactStatus::AlreadyExists));
        }
        Err(e) => return Err(write_error(path)(e)),
    };
    file.write_all(contents.as_bytes())
        .map_err(write_error(path))?;

    debug!(path = %path.display(), "created");
    Ok(artifact(ArtifactStatus::Created))
}

/// Append `pub mod <module>;` to `mod_file` unless it is already declared
fn ensure_declared(mod_file: &Path, module: &str) -> Result<Artifact, CliError> {
    let artifact = |status| Artifact {
        path: mod_file.to_path_buf(),
        module: Some(module.to_string()),
        status,
    };

    let existing = fs::read_to_string(mod_file).map_err(write_error(mod_file))?;
    if declares_module(&existing, module) {
        return Ok(artifact(ArtifactStatus::AlreadyExists));
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(mod_file)
        .map_err(write_error(mod_file))?;
    let separator = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    writeln!(file, "{}pub mod {};", separator, module).map_err(write_error(mod_file))?;

    debug!(path = %mod_file.display(), module, "declared module");
    Ok(artifact(ArtifactStatus::Created))
}

/// Whether `source` has a `mod <module>;` line under any visibility
fn declares_module(source: &str, module: &str) -> bool {
    source.lines().any(|line| {
        let line = strip_visibility(line.trim());
        line.strip_prefix("mod ")
            .and_then(|rest| rest.strip_suffix(';'))
            .is_some_and(|name| name.trim() == module)
    })
}

/// Drop a leading `pub`, `pub(crate)`, `pub(in path)` and the like
fn strip_visibility(line: &str) -> &str {
    let Some(rest) = line.strip_prefix("pub") else {
        return line;
    };
    let rest_trimmed = rest.trim_start();
    if let Some((_, after)) = rest_trimmed
        .strip_prefix('(')
        .and_then(|scope| scope.split_once(')'))
    {
        return after.trim_start();
    }
    if rest.starts_with(char::is_whitespace) {
        rest_trimmed
    } else {
        line
    }
}
