//! ytmp3-core: builds and runs the yt-dlp invocation behind `ytmp3`

pub mod command;
pub mod config;
pub mod error;
pub mod invoker;

pub use command::ExtractCommand;
pub use config::Config;
pub use error::{ConfigError, InvokeError};
pub use invoker::Invoker;
