//! Errors raised by the command line before any file is touched

use std::path::{Component, Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// The files given to a command can not be used together
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// Two roles were given the same file
    #[error("{first} and {second} must be different files, both are {}", .path.display())]
    #[diagnostic(help("pick another name for one of them"))]
    CollidingFiles {
        /// Role of the first file
        first: &'static str,
        /// Role of the second file
        second: &'static str,
        /// The shared path
        path: PathBuf,
    },
}

/// The path without `.` components
fn normalized(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Make sure no two roles share a file
pub fn ensure_distinct(files: &[(&'static str, &Path)]) -> Result<(), UsageError> {
    for (i, &(first, a)) in files.iter().enumerate() {
        for &(second, b) in &files[i + 1..] {
            if normalized(a) == normalized(b) {
                return Err(UsageError::CollidingFiles {
                    first,
                    second,
                    path: a.to_path_buf(),
                });
            }
        }
    }
    Ok(())
}
