//! Puzzle input loading

use crate::error::CliError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the runner reads puzzle text from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// `--input -`
    Stdin,
    /// `--input PATH`
    File(PathBuf),
    /// No `--input`: `<inputs>/<year>/day<DD>.txt`
    Default { path: PathBuf, year: u16, day: u8 },
}

impl InputSource {
    /// Read the whole input, using the process's stdin for [`InputSource::Stdin`]
    pub fn read(&self) -> Result<String, CliError> {
        self.read_with_stdin(io::stdin().lock())
    }

    /// Read the whole input, taking stdin from `stdin`
    pub fn read_with_stdin<R: Read>(&self, mut stdin: R) -> Result<String, CliError> {
        match self {
            InputSource::Stdin => {
                debug!("reading input from stdin");
                let mut text = String::new();
                stdin.read_to_string(&mut text)?;
                Ok(text)
            }
            InputSource::File(path) => read_file(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CliError::InputNotFound { path: path.clone() },
                _ => CliError::InputRead {
                    path: path.clone(),
                    source: e,
                },
            }),
            InputSource::Default { path, year, day } => {
                read_file(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => CliError::DefaultInputNotFound {
                        path: path.clone(),
                        year: *year,
                        day: *day,
                    },
                    _ => CliError::InputRead {
                        path: path.clone(),
                        source: e,
                    },
                })
            }
        }
    }
}

fn read_file(path: &Path) -> io::Result<String> {
    debug!(path = %path.display(), "reading input file");
    fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.txt");
        fs::write(&path, "1-2\n").unwrap();

        let text = InputSource::File(path).read_with_stdin(io::empty()).unwrap();
        assert_eq!(text, "1-2\n");
    }

    #[test]
    fn test_reads_stdin() {
        let text = InputSource::Stdin
            .read_with_stdin("from stdin\n".as_bytes())
            .unwrap();
        assert_eq!(text, "from stdin\n");
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.txt");

        let err = InputSource::File(path.clone())
            .read_with_stdin(io::empty())
            .unwrap_err();
        assert!(matches!(err, CliError::InputNotFound { path: ref p } if *p == path));
        assert!(!err.to_string().contains("aoc-new"));
    }

    #[test]
    fn test_missing_default_file_hints_scaffold() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2025").join("day07.txt");

        let err = InputSource::Default {
            path: path.clone(),
            year: 2025,
            day: 7,
        }
        .read_with_stdin(io::empty())
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains(&path.display().to_string()), "{}", message);
        assert!(message.contains("aoc-new 2025 7"), "{}", message);
    }
}
