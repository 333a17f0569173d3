//! ffprobe execution
//!
//! Runs ffprobe against a single file and hands back its JSON document
//! untouched. Decoding the document into a summary is the job of
//! [`crate::probe`].

use crate::config::ProbeConfig;
use crate::error::{CoreResult, command_failed_error, command_start_error, ffprobe_parse_error};
use serde_json::Value;
use std::path::Path;
use std::process::Command;

/// Arguments passed before the target path: quiet diagnostics, JSON output,
/// stream section only.
pub const FFPROBE_ARGS: &[&str] = &["-v", "quiet", "-print_format", "json", "-show_streams"];

/// Capability to fetch ffprobe's raw stream document for a file.
pub trait FfprobeExecutor {
    /// Returns the parsed JSON document ffprobe printed for `path`.
    ///
    /// Fails if ffprobe cannot be started, exits non-zero, or prints
    /// something that is not JSON.
    fn probe_raw(&self, path: &Path) -> CoreResult<Value>;
}

/// `FfprobeExecutor` that spawns the ffprobe binary.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: String,
}

impl CommandFfprobeExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.ffprobe_program.clone())
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe_raw(&self, path: &Path) -> CoreResult<Value> {
        log::debug!("Running {} on: {}", self.program, path.display());

        let output = Command::new(&self.program)
            .args(FFPROBE_ARGS)
            .arg(path)
            .output()
            .map_err(|e| command_start_error(&self.program, e))?;

        if !output.status.success() {
            log::debug!(
                "{} exited with {} for {}",
                self.program,
                output.status,
                path.display()
            );
            return Err(command_failed_error(&self.program, output.status, &output.stderr));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| ffprobe_parse_error(path, e))
    }
}
