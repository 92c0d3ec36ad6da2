//! Runs yt-dlp as a child process

use crate::command::{ExtractCommand, TOOL_NAME};
use crate::config::Config;
use crate::error::InvokeError;
use std::ffi::OsStr;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Invoker {
    yt_dlp_path: PathBuf,
}

impl Invoker {
    pub fn new(yt_dlp_path: PathBuf) -> Self {
        Self { yt_dlp_path }
    }

    /// Use the configured yt-dlp path, or find it on `PATH`
    pub fn locate(config: &Config) -> Result<Self, InvokeError> {
        let path = match config.paths.yt_dlp {
            Some(ref path) => path.clone(),
            None => which::which(TOOL_NAME)
                .map_err(|_| InvokeError::ToolNotFound(TOOL_NAME.to_string()))?,
        };
        debug!("Using yt-dlp at: {}", path.display());
        Ok(Self::new(path))
    }

    /// Run the extraction and wait for yt-dlp to exit.
    ///
    /// The child shares our working directory and standard streams. A
    /// non-zero exit is returned as `ToolFailed`; there are no retries.
    pub async fn run(&self, command: &ExtractCommand) -> Result<(), InvokeError> {
        info!("Extracting MP3 from: {}", command.url().to_string_lossy());
        debug!("Running: {}", command);
        self.status_of(command.tool_args()).await
    }

    async fn status_of<I, S>(&self, args: I) -> Result<(), InvokeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let status = Command::new(&self.yt_dlp_path).args(args).status().await?;

        if !status.success() {
            debug!("yt-dlp exited with {}", status);
            return Err(InvokeError::ToolFailed(status.code()));
        }

        Ok(())
    }
}
