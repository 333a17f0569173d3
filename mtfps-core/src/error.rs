// ============================================================================
// mtfps-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for probing and file selection
//
// Probe failures (ffprobe could not be run, exited non-zero, produced output
// we could not decode, or described a file without the streams we need) are
// kept apart from selection failures (directory listing and metadata errors)
// so callers can report them differently.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by mtfps-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, io::Error),

    #[error("'{0}' exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("No video stream found in {}", .0.display())]
    NoVideoStream(PathBuf),

    #[error("Audio stream {index} in {} has no language tag", path.display())]
    MissingAudioLanguage { path: PathBuf, index: usize },
}

impl CoreError {
    /// True when the error means "this file could not be probed", as opposed
    /// to a failure while selecting files.
    pub fn is_probe_failure(&self) -> bool {
        matches!(
            self,
            CoreError::CommandStart(..)
                | CoreError::CommandFailed(..)
                | CoreError::FfprobeParse(_)
                | CoreError::NoVideoStream(_)
                | CoreError::MissingAudioLanguage { .. }
        )
    }
}

/// Result type for mtfps-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a program that could not be spawned.
pub(crate) fn command_start_error(program: &str, err: io::Error) -> CoreError {
    CoreError::CommandStart(program.to_string(), err)
}

/// Builds a `CommandFailed` error from a finished process.
pub(crate) fn command_failed_error(program: &str, status: ExitStatus, stderr: &[u8]) -> CoreError {
    CoreError::CommandFailed(
        program.to_string(),
        status,
        String::from_utf8_lossy(stderr).trim().to_string(),
    )
}

/// Builds a `FfprobeParse` error naming the file whose output was rejected.
pub(crate) fn ffprobe_parse_error(path: &Path, detail: impl std::fmt::Display) -> CoreError {
    CoreError::FfprobeParse(format!("{}: {}", path.display(), detail))
}
