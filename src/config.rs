//! Input path resolution.

use std::{env, path::PathBuf};

/// Name of the file read when no input path is given.
pub const INPUT_FILE_NAME: &str = "input.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
}

impl Config {
    /// Resolves `input.txt` next to the running executable, falling back to
    /// the working directory when the executable path is unknown.
    pub fn resolve() -> Self {
        let base_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        Config::in_dir(base_dir)
    }

    pub fn in_dir(base_dir: impl Into<PathBuf>) -> Self {
        Config {
            input: base_dir.into().join(INPUT_FILE_NAME),
        }
    }

    pub fn with_input(input: impl Into<PathBuf>) -> Self {
        Config {
            input: input.into(),
        }
    }
}
