//! Core library for summarizing media files with ffprobe.
//!
//! This crate decides which files to look at (single file, recursive walk, or
//! largest file per subdirectory) and reduces ffprobe's stream listing to the
//! video codec, resolution, HDR classification and audio languages.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mtfps_core::{CommandFfprobeExecutor, ProbeConfig, SelectionPolicy, probe_file, select_files};
//! use std::path::Path;
//!
//! let config = ProbeConfig::default();
//! let executor = CommandFfprobeExecutor::from_config(&config);
//!
//! let files = select_files(SelectionPolicy::RecursiveWalk, Path::new("/path/to/videos"), &config).unwrap();
//! for file in files {
//!     let summary = probe_file(&executor, &file.path).unwrap();
//!     println!("{}: {}x{}", file.label, summary.width, summary.height);
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod probe;

// Re-exports for public API
pub use config::ProbeConfig;
pub use discovery::{SelectedFile, SelectionPolicy, select_files, select_files_with};
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor, check_dependency};
pub use probe::{HdrStatus, ProbeSummary, probe_file, summarize_streams};
