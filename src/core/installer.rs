use crate::core::config::InstallConfig;
use crate::error::Result;
use crate::utils::prompt::Confirm;
use crate::utils::{fs, shell};
use std::ffi::OsString;
use std::path::Path;

/// How the artifact reached the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    Direct,
    Elevated,
}

/// Owner given to files installed with elevated privileges.
pub fn privileged_owner() -> &'static str {
    if cfg!(target_os = "macos") {
        "root:wheel"
    } else {
        "root:root"
    }
}

/// Commands run through the elevation tool when the target directory is not
/// writable, in order.
pub fn elevated_commands(source: &Path, target_dir: &Path, target: &Path) -> Vec<Vec<OsString>> {
    vec![
        vec!["mkdir".into(), "-p".into(), target_dir.into()],
        vec!["mv".into(), source.into(), target.into()],
        vec!["chown".into(), privileged_owner().into(), target.into()],
    ]
}

/// Returns `false` if the user declined to replace an existing install.
pub fn confirm_overwrite<P: Confirm>(target: &Path, prompt: &mut P) -> Result<bool> {
    if !target.exists() {
        return Ok(true);
    }

    println!("⚠️  {} already exists", target.display());
    prompt.confirm("Do you want to overwrite it?")
}

/// Move the downloaded file into place.
///
/// Writability of the target directory at this point decides whether
/// elevation is used, regardless of what the requirement check predicted.
pub fn install_artifact(source: &Path, config: &InstallConfig) -> Result<InstallMethod> {
    let target = config.target_path();

    if fs::is_dir_writable(&config.target_dir) {
        tracing::debug!(target = %target.display(), "target directory writable, moving directly");
        fs::move_file(source, &target)?;
        return Ok(InstallMethod::Direct);
    }

    println!(
        "🔐 Elevated privileges required to write to {}",
        config.target_dir.display()
    );
    for args in elevated_commands(source, &config.target_dir, &target) {
        shell::run_elevated(&config.elevation_tool, &args)?;
    }
    Ok(InstallMethod::Elevated)
}

/// Make the download executable, confirm any overwrite, then install it.
///
/// `Ok(None)` means the user cancelled; the existing target is left untouched.
pub fn place_artifact<P: Confirm>(
    source: &Path,
    config: &InstallConfig,
    prompt: &mut P,
) -> Result<Option<InstallMethod>> {
    fs::make_executable(source)?;

    let target = config.target_path();
    if !confirm_overwrite(&target, prompt)? {
        println!("Installation cancelled.");
        return Ok(None);
    }

    println!("📦 Installing to {}...", target.display());
    install_artifact(source, config).map(Some)
}
