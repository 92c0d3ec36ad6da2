mod args;

use anyhow::Result;
use clap::CommandFactory;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{Cli, Invocation};
use ytmp3_core::{Config, ExtractCommand, InvokeError, Invoker};

/// Exit code for a wrong argument count
const USAGE_EXIT: u8 = 1;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // stdout belongs to yt-dlp
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ytmp3=warn")))
        .init();

    let cli = match args::parse(std::env::args_os()) {
        Invocation::Extract(cli) => cli,
        Invocation::Builtin(e) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Usage => {
            debug!("Expected exactly one argument");
            println!("{}", Cli::command().render_usage());
            return Ok(ExitCode::from(USAGE_EXIT));
        }
    };

    let config = Config::load()?;
    let invoker = Invoker::locate(&config)?;
    let command = ExtractCommand::new(cli.url);

    match invoker.run(&command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ InvokeError::ToolFailed(Some(_))) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
        Err(e) => Err(e.into()),
    }
}
