use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq, Eq)]
#[clap(name = "cleen-install")]
#[clap(about = "Install the cleen Clean Language version manager")]
#[clap(disable_version_flag = true)]
pub struct Cli {
    /// Directory to install cleen into (default: /usr/local/bin)
    #[clap(long = "target-dir", value_name = "PATH", require_equals = true)]
    pub target_dir: Option<PathBuf>,
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Install(Cli),
    Help(String),
    Invalid { message: String, usage: String },
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Parse the full argument list, program name included.
///
/// `--help`/`-h` anywhere wins over everything else, even unknown flags.
pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.iter().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        return Invocation::Help(usage());
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) => Invocation::Install(cli),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Invocation::Help(usage()),
        Err(e) => Invocation::Invalid {
            message: first_line(&e.to_string()),
            usage: usage(),
        },
    }
}

fn first_line(rendered: &str) -> String {
    rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
