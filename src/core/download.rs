use crate::error::{InstallError, Result};
use crate::utils::fs;
use std::path::Path;
use std::process::Command;

pub const DOWNLOAD_TOOL: &str = "curl";

/// Something that can place the contents of a URL at a local path.
pub trait Fetch {
    /// Fail early if the fetcher cannot work on this machine.
    fn ensure_available(&self) -> Result<()>;

    fn fetch(&self, url: &str, destination: &Path) -> Result<()>;
}

/// Downloads through the system `curl`, following redirects.
pub struct Downloader;

impl Default for Downloader {
    fn default() -> Self {
        Self
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self
    }
}

impl Fetch for Downloader {
    fn ensure_available(&self) -> Result<()> {
        which::which(DOWNLOAD_TOOL)
            .map(|path| tracing::debug!(path = %path.display(), "found download tool"))
            .map_err(|_| InstallError::MissingTool {
                tool: DOWNLOAD_TOOL.to_string(),
                hint: "Please install curl and try again.".to_string(),
            })
    }

    fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        tracing::debug!(url, destination = %destination.display(), "running curl");

        let output = Command::new(DOWNLOAD_TOOL)
            .arg("-f") // Fail on HTTP errors
            .arg("-s") // Silent
            .arg("-S") // ...but still report errors
            .arg("-L") // Follow redirects
            .arg("-H")
            .arg(concat!("User-Agent: cleen-install/", env!("CARGO_PKG_VERSION")))
            .arg("-o")
            .arg(destination)
            .arg(url)
            .output()
            .map_err(|e| InstallError::download_failed(url, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("curl exited with status {:?}", output.status.code()),
                detail => detail.to_string(),
            };
            return Err(InstallError::download_failed(url, message));
        }

        Ok(())
    }
}

/// Fetch `url` into `destination` and reject an empty result.
pub fn download_artifact<F: Fetch>(fetcher: &F, url: &str, destination: &Path) -> Result<u64> {
    println!("⬇️  Downloading from {url}...");
    fetcher.fetch(url, destination)?;

    let size = fs::file_size(destination)
        .map_err(|e| InstallError::download_failed(url, e.to_string()))?;
    if size == 0 {
        return Err(InstallError::EmptyDownload {
            url: url.to_string(),
        });
    }

    println!("✅ Downloaded {size} bytes");
    Ok(size)
}
