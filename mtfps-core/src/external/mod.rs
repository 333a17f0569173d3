// ============================================================================
// mtfps-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and the file system
//
// This module encapsulates everything that leaves the process: running
// ffprobe and reading file metadata. Both sit behind traits so the probing
// and selection logic can be exercised in tests without a real binary or
// real media files.
//
// KEY COMPONENTS:
// - FfprobeExecutor trait and its process-backed implementation
// - Dependency checking
// - File metadata access abstraction

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the trait and implementation for executing ffprobe
pub mod ffprobe_executor;

/// In-memory ffprobe executor for unit tests
#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version` and discards its output. Only a failure
/// to spawn counts; the exit status is ignored.
///
/// # Returns
///
/// * `Ok(())` - If the command could be started
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(command_start_error(cmd_name, e))
        }
    }
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Abstraction over file metadata lookups used by file selection.
///
/// # Examples
///
/// ```rust
/// use mtfps_core::external::FileMetadataProvider;
/// use mtfps_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedSize;
///
/// impl FileMetadataProvider for FixedSize {
///     fn get_size(&self, _path: &Path) -> CoreResult<u64> {
///         Ok(1_000_000)
///     }
/// }
///
/// assert_eq!(FixedSize.get_size(Path::new("/fake/path")).unwrap(), 1_000_000);
/// ```
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// `FileMetadataProvider` backed by `std::fs::metadata`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
