//! File discovery module for choosing which files to probe.
//!
//! A [`SelectionPolicy`] maps a root path to an ordered list of
//! [`SelectedFile`]s. Three policies exist:
//!
//! - `SingleFile`: the root itself
//! - `RecursiveWalk`: every media file under the root, at any depth
//! - `LargestPerSubdir`: the biggest file directly inside each immediate
//!   subdirectory of the root
//!
//! Listings are sorted by file name so the order is stable across platforms.

use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{FileMetadataProvider, StdFsMetadataProvider};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How the files to probe are chosen from a root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    SingleFile,
    RecursiveWalk,
    LargestPerSubdir,
}

impl SelectionPolicy {
    /// Picks the policy for a command line.
    ///
    /// Max mode wins; otherwise a file is probed on its own and anything else
    /// is walked.
    pub fn resolve(path_is_file: bool, max_mode: bool) -> Self {
        if max_mode {
            SelectionPolicy::LargestPerSubdir
        } else if path_is_file {
            SelectionPolicy::SingleFile
        } else {
            SelectionPolicy::RecursiveWalk
        }
    }
}

/// A file chosen for probing and the label it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name for walks, subdirectory name for max mode, the path as
    /// given for single files
    pub label: String,
    pub path: PathBuf,
}

impl SelectedFile {
    fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Selects files under `root` according to `policy`, using file system sizes.
///
/// # Examples
///
/// ```rust,no_run
/// use mtfps_core::{ProbeConfig, SelectionPolicy, select_files};
/// use std::path::Path;
///
/// let files = select_files(
///     SelectionPolicy::RecursiveWalk,
///     Path::new("/path/to/videos"),
///     &ProbeConfig::default(),
/// ).unwrap();
/// for file in files {
///     println!("{} -> {}", file.label, file.path.display());
/// }
/// ```
pub fn select_files(
    policy: SelectionPolicy,
    root: &Path,
    config: &ProbeConfig,
) -> CoreResult<Vec<SelectedFile>> {
    select_files_with(policy, root, config, &StdFsMetadataProvider)
}

/// Same as [`select_files`] with an injectable metadata provider.
pub fn select_files_with(
    policy: SelectionPolicy,
    root: &Path,
    config: &ProbeConfig,
    metadata: &dyn FileMetadataProvider,
) -> CoreResult<Vec<SelectedFile>> {
    let selected = match policy {
        SelectionPolicy::SingleFile => select_single_file(root)?,
        SelectionPolicy::RecursiveWalk => find_media_files(root, config)?,
        SelectionPolicy::LargestPerSubdir => find_largest_per_subdir(root, metadata)?,
    };
    log::debug!(
        "{:?} selected {} file(s) under {}",
        policy,
        selected.len(),
        root.display()
    );
    Ok(selected)
}

fn select_single_file(path: &Path) -> CoreResult<Vec<SelectedFile>> {
    if !path.is_file() {
        return Err(CoreError::PathError(format!(
            "'{}' is not a file",
            path.display()
        )));
    }
    Ok(vec![SelectedFile::new(path.to_string_lossy(), path)])
}

/// Walks `root` recursively and returns every file whose name ends with one
/// of the configured media suffixes.
///
/// Directory links are not followed. An error on `root` itself is returned;
/// unreadable entries below it are logged and skipped.
pub fn find_media_files(root: &Path, config: &ProbeConfig) -> CoreResult<Vec<SelectedFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        // symlinks to regular files still count; dangling links do not
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if config.is_media_file_name(&name) {
            files.push(SelectedFile::new(name.into_owned(), entry.path()));
        }
    }
    Ok(files)
}

/// For each immediate subdirectory of `root`, returns its largest immediate
/// file. Subdirectories without files are skipped.
pub fn find_largest_per_subdir(
    root: &Path,
    metadata: &dyn FileMetadataProvider,
) -> CoreResult<Vec<SelectedFile>> {
    let mut selected = Vec::new();

    for subdir in sorted_entries(root)? {
        if !subdir.is_dir() {
            continue;
        }
        let label = match subdir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let mut largest: Option<(u64, PathBuf)> = None;
        for file in sorted_entries(&subdir)? {
            if !file.is_file() {
                continue;
            }
            let size = metadata.get_size(&file)?;
            // strictly greater keeps the first of equal sizes
            if largest.as_ref().is_none_or(|(best, _)| size > *best) {
                largest = Some((size, file));
            }
        }

        match largest {
            Some((size, path)) => {
                log::debug!("Largest file in {}: {} ({} bytes)", label, path.display(), size);
                selected.push(SelectedFile::new(label, path));
            }
            None => log::warn!("Skipping '{}': no files found", subdir.display()),
        }
    }

    Ok(selected)
}

fn sorted_entries(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    Ok(entries)
}
