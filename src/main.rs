use anyhow::Result;

use cleen_install::cli::{self, Invocation};
use cleen_install::commands::install::install;
use cleen_install::core::cleanup;
use cleen_install::core::config::InstallConfig;
use cleen_install::core::download::Downloader;
use cleen_install::logging;
use cleen_install::utils::prompt::TerminalPrompt;

fn main() -> Result<()> {
    logging::init_logging();

    let cli = match cli::parse_args(std::env::args_os()) {
        Invocation::Install(cli) => cli,
        Invocation::Help(usage) => {
            println!("{usage}");
            return Ok(());
        }
        Invocation::Invalid { message, usage } => {
            eprintln!("Error: {message}");
            eprintln!();
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    if let Err(e) = cleanup::install_interrupt_handler() {
        tracing::warn!("{e}");
    }

    let config = InstallConfig::load(cli.target_dir);
    // Temporary files are released inside `install`, before an error reaches here.
    let outcome = install(&config, &Downloader::new(), &mut TerminalPrompt)
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!(?outcome, "installer finished");
    Ok(())
}
