//! Fixed yt-dlp argument template

use std::ffi::{OsStr, OsString};
use std::fmt;

/// Name of the external tool, as looked up on `PATH`.
pub const TOOL_NAME: &str = "yt-dlp";

/// Flags passed ahead of the URL, in the order yt-dlp receives them.
const EXTRACT_FLAGS: [&str; 7] = [
    // Audio only
    "-x",
    "--audio-format", "mp3",
    // Best VBR quality
    "--audio-quality", "0",
    // Title-based filename, extension inferred by yt-dlp
    "-o", "%(title)s.%(ext)s",
];

/// A single "extract as MP3" invocation. The URL is the only variable part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractCommand {
    url: OsString,
}

impl ExtractCommand {
    /// The URL is not validated, not even as UTF-8; yt-dlp decides what
    /// it accepts.
    pub fn new(url: impl Into<OsString>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &OsStr {
        &self.url
    }

    /// Arguments after the program name.
    pub fn tool_args(&self) -> impl Iterator<Item = &OsStr> {
        EXTRACT_FLAGS
            .iter()
            .copied()
            .map(OsStr::new)
            .chain(std::iter::once(self.url.as_os_str()))
    }

    /// Full argument vector, tool name first.
    pub fn argv(&self) -> Vec<&OsStr> {
        std::iter::once(OsStr::new(TOOL_NAME))
            .chain(self.tool_args())
            .collect()
    }
}

impl fmt::Display for ExtractCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let argv: Vec<_> = self.argv().iter().map(|a| a.to_string_lossy()).collect();
        write!(f, "{}", argv.join(" "))
    }
}
