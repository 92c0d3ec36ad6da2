//! Error types for ytmp3-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("{0} not found. Install with: pip install yt-dlp")]
    ToolNotFound(String),

    #[error("yt-dlp failed with exit code: {0:?}")]
    ToolFailed(Option<i32>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InvokeError {
    /// Process exit code to report for this failure. Never 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            InvokeError::ToolFailed(Some(code)) => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),
}
