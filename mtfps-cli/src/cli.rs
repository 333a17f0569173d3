// mtfps-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "mtfps",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mtfps: Media stream summaries via ffprobe",
    long_about = "Prints video codec, resolution, HDR status and audio languages for a media \
                  file, for every media file under a directory, or with --max-mode for the \
                  largest file in each subfolder of a directory.",
    override_usage = "mtfps [OPTIONS] <FILE_OR_DIRECTORY>\n       mtfps [OPTIONS] --max-mode <DIRECTORY>"
)]
pub struct Cli {
    /// Media file or directory to probe
    #[arg(required = true, value_name = "FILE_OR_DIRECTORY")]
    pub input_path: PathBuf,

    /// Probe only the largest file in each immediate subfolder of the directory
    #[arg(long)]
    pub max_mode: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// ffprobe binary to run.
    /// Can also be set via the MTFPS_FFPROBE environment variable.
    #[arg(long, value_name = "PROGRAM", env = "MTFPS_FFPROBE", default_value = mtfps_core::config::DEFAULT_FFPROBE_PROGRAM)]
    pub ffprobe: String,
}
