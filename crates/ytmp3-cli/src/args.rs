use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "ytmp3")]
#[command(author, version, about = "Download a YouTube video's audio as MP3 (via yt-dlp)")]
pub struct Cli {
    /// YouTube URL, passed to yt-dlp unchanged
    #[arg(
        value_name = "youtube_url",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub url: OsString,
}

/// Outcome of reading the command line
#[derive(Debug)]
pub enum Invocation {
    Extract(Cli),
    /// `--help` / `--version`, already rendered by clap
    Builtin(clap::Error),
    /// Anything but exactly one argument
    Usage,
}

/// Check the raw argument count before clap sees it, so a `--` separator
/// can't turn two arguments into one.
pub fn parse<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() != 2 {
        return Invocation::Usage;
    }

    match Cli::try_parse_from(argv) {
        Ok(cli) => Invocation::Extract(cli),
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                Invocation::Builtin(e)
            }
            _ => Invocation::Usage,
        },
    }
}
