//! Configuration for probing and file selection.
//!
//! `ProbeConfig` carries the few knobs the library has: which ffprobe binary
//! to run and which file name suffixes count as media during a recursive walk.

/// Default ffprobe program, resolved through `PATH`.
pub const DEFAULT_FFPROBE_PROGRAM: &str = "ffprobe";

/// File name suffixes picked up by the recursive walk. Matching is
/// case-sensitive on the literal suffix.
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &[".mkv", ".mp4", ".avi", ".webm"];

/// Settings shared by the prober and the selector.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Program name or path used to invoke ffprobe
    pub ffprobe_program: String,

    /// Suffixes a file name must end with to be selected by a recursive walk
    pub media_extensions: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_program: DEFAULT_FFPROBE_PROGRAM.to_string(),
            media_extensions: DEFAULT_MEDIA_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the ffprobe program.
    pub fn ffprobe_program(mut self, program: impl Into<String>) -> Self {
        self.ffprobe_program = program.into();
        self
    }

    /// Returns true if `file_name` ends with one of the configured suffixes.
    pub fn is_media_file_name(&self, file_name: &str) -> bool {
        self.media_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}
