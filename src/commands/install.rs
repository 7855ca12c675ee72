use crate::core::cleanup::TempArtifact;
use crate::core::config::{InstallConfig, BINARY_NAME};
use crate::core::download::{download_artifact, Fetch};
use crate::core::installer::{place_artifact, InstallMethod};
use crate::core::requirements::check_requirements;
use crate::core::verify::verify_installation;
use crate::error::Result;
use crate::utils::prompt::Confirm;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed {
        path: PathBuf,
        version: Option<String>,
        method: InstallMethod,
    },
    /// The user declined to overwrite an existing binary.
    Cancelled,
}

pub fn install<F: Fetch, P: Confirm>(
    config: &InstallConfig,
    fetcher: &F,
    prompt: &mut P,
) -> Result<InstallOutcome> {
    println!("Installing {BINARY_NAME} into {}", config.target_dir.display());
    println!();

    check_requirements(config, fetcher)?;

    // Removed when this guard drops, on success and on every error path.
    let artifact = TempArtifact::create()?;
    download_artifact(fetcher, &config.download_url, artifact.path())?;

    let method = match place_artifact(artifact.path(), config, prompt)? {
        Some(method) => method,
        None => return Ok(InstallOutcome::Cancelled),
    };

    let path = config.target_path();
    let version = verify_installation(&path)?;

    println!();
    println!("🎉 {BINARY_NAME} is installed at {}", path.display());
    println!();
    println!("Get started with:");
    println!("   {BINARY_NAME} install latest");

    Ok(InstallOutcome::Installed {
        path,
        version,
        method,
    })
}
