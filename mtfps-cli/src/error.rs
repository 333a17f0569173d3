// ============================================================================
// mtfps-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types for the CLI
//
// Wraps core errors and adds the one CLI-specific context: which file could
// not be probed, named the way the user sees it in the output.

use mtfps_core::CoreError;
use std::io;
use thiserror::Error;

/// Errors surfaced by the `mtfps` binary. All of them end the run with exit
/// status 1.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unable to probe {name} (are you sure this is a video file?)")]
    ProbeFailed {
        name: String,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
