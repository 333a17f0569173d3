//! Implementation of the probe run.
//!
//! Resolves the selection policy from the arguments, selects files, and probes
//! them one at a time. The first file that cannot be probed stops the run.

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::output::write_block;

use mtfps_core::{
    CommandFfprobeExecutor, FfprobeExecutor, ProbeConfig, SelectedFile, SelectionPolicy,
    check_dependency, probe_file, select_files,
};

use std::io::{self, Write};

use log::debug;

/// Builds the core configuration from the command line.
pub fn probe_config(args: &Cli) -> ProbeConfig {
    ProbeConfig::new().ffprobe_program(args.ffprobe.clone())
}

/// Entry point used by `main`: real ffprobe, output to stdout.
pub fn run_probe(args: &Cli) -> CliResult<()> {
    let config = probe_config(args);
    check_dependency(&config.ffprobe_program)?;

    let policy = SelectionPolicy::resolve(args.input_path.is_file(), args.max_mode);
    debug!("Input: {} ({:?})", args.input_path.display(), policy);

    let files = select_files(policy, &args.input_path, &config)?;
    let executor = CommandFfprobeExecutor::from_config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    probe_selected(&executor, policy, &files, &mut out)
}

/// Probes `files` in order and writes one block per file to `out`.
///
/// Returns `CliError::ProbeFailed` for the first file that cannot be probed;
/// nothing after it is probed. Other core errors (e.g. the file vanished)
/// pass through unchanged.
pub fn probe_selected<E, W>(
    executor: &E,
    policy: SelectionPolicy,
    files: &[SelectedFile],
    out: &mut W,
) -> CliResult<()>
where
    E: FfprobeExecutor + ?Sized,
    W: Write,
{
    for file in files {
        match probe_file(executor, &file.path) {
            Ok(summary) => {
                write_block(out, policy, &file.label, &summary)?;
                out.flush()?;
            }
            Err(source) if source.is_probe_failure() => {
                debug!("Probe failed for {}: {}", file.path.display(), source);
                return Err(CliError::ProbeFailed {
                    name: failure_name(policy, file),
                    source,
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Name used in the failure message: the folder label is not helpful in max
/// mode, so the selected file's name is reported there.
fn failure_name(policy: SelectionPolicy, file: &SelectedFile) -> String {
    match policy {
        SelectionPolicy::LargestPerSubdir => file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.label.clone()),
        SelectionPolicy::SingleFile | SelectionPolicy::RecursiveWalk => file.label.clone(),
    }
}
