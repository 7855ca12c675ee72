use crate::core::config::BINARY_NAME;
use crate::error::{InstallError, Result};
use crate::utils::{fs, shell};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where the binary name resolves on `PATH`, relative to the installed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    Installed,
    Shadowed(PathBuf),
    NotFound,
}

/// Confirm the installed binary is usable.
///
/// Only a non-executable file is fatal. Returns the reported version if the
/// binary answered `--version`.
pub fn verify_installation(target: &Path) -> Result<Option<String>> {
    println!("🔍 Verifying installation...");

    if !fs::is_executable(target) {
        return Err(InstallError::NotExecutable {
            path: target.to_path_buf(),
        });
    }

    let version = query_version(target);
    match &version {
        Some(version) => println!("✅ Installed {version}"),
        None => println!("✅ {BINARY_NAME} installed successfully"),
    }

    report_path_resolution(target, resolve_on_path(target));
    Ok(version)
}

/// First line of `<binary> --version`, if it runs and exits successfully.
pub fn query_version(binary: &Path) -> Option<String> {
    let output = match Command::new(binary).arg("--version").output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "could not run installed binary");
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!(code = ?output.status.code(), "installed binary rejected --version");
        return None;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

pub fn resolve_on_path(target: &Path) -> PathResolution {
    match which::which(BINARY_NAME) {
        Ok(found) if same_file(&found, target) => PathResolution::Installed,
        Ok(found) => PathResolution::Shadowed(found),
        Err(_) => PathResolution::NotFound,
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn report_path_resolution(target: &Path, resolution: PathResolution) {
    match resolution {
        PathResolution::Installed => {}
        PathResolution::Shadowed(other) => {
            println!(
                "⚠️  '{BINARY_NAME}' on your PATH resolves to {}, not {}",
                other.display(),
                target.display()
            );
            println!(
                "   Remove the other copy or put {} earlier in PATH.",
                parent_display(target)
            );
        }
        PathResolution::NotFound => {
            println!("⚠️  '{BINARY_NAME}' was not found on your PATH");
            if let Some(dir) = target.parent() {
                if !shell::path_contains(dir) {
                    println!("   Add this to your shell config:");
                    println!("   export PATH=\"{}:$PATH\"", dir.display());
                }
            }
            println!("   Or run it with the full path: {}", target.display());
        }
    }
}

fn parent_display(target: &Path) -> String {
    target
        .parent()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| target.display().to_string())
}
