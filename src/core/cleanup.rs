//! Guaranteed removal of the temporary download.
//!
//! A [`TempArtifact`] removes its file when dropped. Its path is also kept in
//! a process-wide registry so the interrupt handler installed by
//! [`install_interrupt_handler`] can remove it before the process exits.
//! Whichever runs first takes the path out of the registry, so each file is
//! removed at most once.

use crate::error::{InstallError, Result};
use crate::utils::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Exit code used when the run is interrupted by a signal.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static PENDING: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());

pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Create an empty scratch file in the system temp directory.
    pub fn create() -> Result<Self> {
        Self::create_in(&std::env::temp_dir())
    }

    pub fn create_in(dir: &Path) -> Result<Self> {
        let temp_path = tempfile::Builder::new()
            .prefix(&format!("cleen-install-{}-", std::process::id()))
            .tempfile_in(dir)?
            .into_temp_path();

        // Ownership moves to the guard so removal goes through the registry.
        let path = temp_path.keep().map_err(|e| InstallError::TempFile {
            message: e.to_string(),
        })?;

        register(path.clone());
        tracing::debug!(path = %path.display(), "created temporary file");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now. Safe to call more than once.
    pub fn cleanup(&self) {
        if take(&self.path) {
            remove(&self.path);
        }
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn lock_pending() -> std::sync::MutexGuard<'static, Vec<PathBuf>> {
    // A poisoned registry still holds valid paths.
    PENDING.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn register(path: PathBuf) {
    lock_pending().push(path);
}

fn take(path: &Path) -> bool {
    let mut pending = lock_pending();
    match pending.iter().position(|p| p == path) {
        Some(index) => {
            pending.swap_remove(index);
            true
        }
        None => false,
    }
}

fn remove(path: &Path) {
    match fs::remove_file_if_exists(path) {
        Ok(true) => tracing::debug!(path = %path.display(), "removed temporary file"),
        Ok(false) => {}
        Err(e) => eprintln!(
            "⚠️  Failed to remove temporary file {}: {e}",
            path.display()
        ),
    }
}

/// Remove every registered temporary file.
pub fn release_all() {
    let paths: Vec<PathBuf> = lock_pending().drain(..).collect();
    for path in &paths {
        remove(path);
    }
}

/// Remove pending temporary files on SIGINT/SIGTERM, then exit with 130.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        eprintln!();
        eprintln!("Interrupted, cleaning up...");
        release_all();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .map_err(|e| InstallError::TempFile {
        message: format!("Failed to install interrupt handler: {e}"),
    })
}
