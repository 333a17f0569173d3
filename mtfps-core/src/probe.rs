//! Stream summaries from ffprobe output.
//!
//! This module turns the JSON document produced by an [`FfprobeExecutor`] into
//! a [`ProbeSummary`]: the first video stream's codec, resolution and HDR
//! classification, plus the language of every audio stream in stream order.
//!
//! Field absence is handled explicitly. Missing colour metadata degrades to
//! [`HdrStatus::Unknown`]; missing codec name, dimensions or audio language
//! tags fail the whole probe.

use crate::error::{CoreError, CoreResult, ffprobe_parse_error};
use crate::external::FfprobeExecutor;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Colour metadata that identifies HDR10 content.
pub const HDR_COLOR_SPACE: &str = "bt2020nc";
pub const HDR_COLOR_TRANSFER: &str = "smpte2084";
pub const HDR_COLOR_PRIMARIES: &str = "bt2020";

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    codec_long_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    color_space: Option<String>,
    color_transfer: Option<String>,
    color_primaries: Option<String>,
    #[serde(default)]
    tags: FfprobeTags,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeTags {
    language: Option<String>,
}

/// HDR classification of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdrStatus {
    /// bt2020nc / smpte2084 / bt2020
    Yes,
    /// All three colour fields present, but not the HDR combination
    No,
    /// At least one colour field missing
    Unknown,
}

impl HdrStatus {
    /// Classifies a stream from its colour space, transfer and primaries.
    pub fn classify(
        color_space: Option<&str>,
        color_transfer: Option<&str>,
        color_primaries: Option<&str>,
    ) -> Self {
        match (color_space, color_transfer, color_primaries) {
            (Some(space), Some(transfer), Some(primaries)) => {
                if space == HDR_COLOR_SPACE
                    && transfer == HDR_COLOR_TRANSFER
                    && primaries == HDR_COLOR_PRIMARIES
                {
                    HdrStatus::Yes
                } else {
                    HdrStatus::No
                }
            }
            _ => HdrStatus::Unknown,
        }
    }
}

impl fmt::Display for HdrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdrStatus::Yes => write!(f, "Yes"),
            HdrStatus::No => write!(f, "No"),
            HdrStatus::Unknown => write!(f, "Probably not (missing metadata)"),
        }
    }
}

/// What gets reported for one probed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSummary {
    /// Long codec name of the first video stream (e.g. "H.265 / HEVC (High Efficiency Video Coding)")
    pub codec_name: String,
    pub width: u32,
    pub height: u32,
    pub hdr_status: HdrStatus,
    /// One entry per audio stream, in stream order
    pub audio_languages: Vec<String>,
}

/// Probes `path` with `executor` and summarizes the result.
pub fn probe_file<E>(executor: &E, path: &Path) -> CoreResult<ProbeSummary>
where
    E: FfprobeExecutor + ?Sized,
{
    let document = executor.probe_raw(path)?;
    let summary = summarize_streams(path, document)?;
    log::debug!(
        "Probed {}: {} {}x{}, HDR {:?}, {} audio stream(s)",
        path.display(),
        summary.codec_name,
        summary.width,
        summary.height,
        summary.hdr_status,
        summary.audio_languages.len()
    );
    Ok(summary)
}

/// Builds a summary from an ffprobe `-show_streams` JSON document.
///
/// Only the first video stream is read; later video streams (cover art,
/// thumbnails) are skipped. `path` is used for error messages only.
pub fn summarize_streams(path: &Path, document: Value) -> CoreResult<ProbeSummary> {
    let output: FfprobeOutput =
        serde_json::from_value(document).map_err(|e| ffprobe_parse_error(path, e))?;

    let mut video: Option<(String, u32, u32, HdrStatus)> = None;
    let mut audio_languages = Vec::new();

    for (index, stream) in output.streams.into_iter().enumerate() {
        match stream.codec_type.as_deref() {
            Some("video") if video.is_none() => {
                let codec_name = stream
                    .codec_long_name
                    .ok_or_else(|| ffprobe_parse_error(path, "video stream has no codec_long_name"))?;
                let width = stream
                    .width
                    .ok_or_else(|| ffprobe_parse_error(path, "video stream has no width"))?;
                let height = stream
                    .height
                    .ok_or_else(|| ffprobe_parse_error(path, "video stream has no height"))?;
                let hdr_status = HdrStatus::classify(
                    stream.color_space.as_deref(),
                    stream.color_transfer.as_deref(),
                    stream.color_primaries.as_deref(),
                );
                video = Some((codec_name, width, height, hdr_status));
            }
            Some("video") => {
                log::trace!("Ignoring additional video stream #{} in {}", index, path.display());
            }
            Some("audio") => {
                let language = stream.tags.language.ok_or_else(|| {
                    CoreError::MissingAudioLanguage {
                        path: path.to_path_buf(),
                        index,
                    }
                })?;
                audio_languages.push(language);
            }
            _ => {}
        }
    }

    let (codec_name, width, height, hdr_status) =
        video.ok_or_else(|| CoreError::NoVideoStream(path.to_path_buf()))?;

    Ok(ProbeSummary {
        codec_name,
        width,
        height,
        hdr_status,
        audio_languages,
    })
}
