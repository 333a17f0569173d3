//! Text rendering of probe summaries.

use mtfps_core::{ProbeSummary, SelectionPolicy};
use std::io::{self, Write};

/// Line printed before a summary in batch modes, if any.
pub fn block_header(policy: SelectionPolicy, label: &str) -> Option<String> {
    match policy {
        SelectionPolicy::SingleFile => None,
        SelectionPolicy::RecursiveWalk => Some(format!("File: {}", label)),
        SelectionPolicy::LargestPerSubdir => Some(format!("Folder: {}", label)),
    }
}

/// Writes the video and audio sections for one file.
pub fn write_summary<W: Write>(out: &mut W, summary: &ProbeSummary) -> io::Result<()> {
    writeln!(out, "Video Info:")?;
    writeln!(out, "  Codec: {}", summary.codec_name)?;
    writeln!(out, "  Resolution: {}x{}", summary.width, summary.height)?;
    writeln!(out, "  HDR: {}", summary.hdr_status)?;
    writeln!(out, "Audio Languages:")?;
    for language in &summary.audio_languages {
        writeln!(out, "  {}", language)?;
    }
    Ok(())
}

/// Writes a full block: optional header, summary, and a trailing blank line
/// in batch modes.
pub fn write_block<W: Write>(
    out: &mut W,
    policy: SelectionPolicy,
    label: &str,
    summary: &ProbeSummary,
) -> io::Result<()> {
    let header = block_header(policy, label);
    if let Some(header) = &header {
        writeln!(out, "{}", header)?;
    }
    write_summary(out, summary)?;
    if header.is_some() {
        writeln!(out)?;
    }
    Ok(())
}
