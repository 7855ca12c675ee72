use crate::core::config::InstallConfig;
use crate::core::download::Fetch;
use crate::error::{InstallError, Result};
use crate::utils::fs;

/// What the pre-flight check learned about the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Writable,
    /// Exists, but the current user cannot write to it.
    NeedsElevation,
    /// Missing default directory, to be created with elevated privileges.
    Missing,
}

pub fn check_requirements<F: Fetch>(config: &InstallConfig, fetcher: &F) -> Result<TargetStatus> {
    println!("🔍 Checking requirements...");

    fetcher.ensure_available()?;

    let dir = &config.target_dir;
    let status = if !dir.exists() {
        println!("⚠️  Target directory {} does not exist", dir.display());
        if !config.is_default_target() {
            return Err(InstallError::TargetDirMissing { path: dir.clone() });
        }
        println!("   It will be created with elevated privileges.");
        TargetStatus::Missing
    } else if !dir.is_dir() {
        return Err(InstallError::TargetNotDirectory { path: dir.clone() });
    } else if fs::is_dir_writable(dir) {
        TargetStatus::Writable
    } else {
        if config.is_default_target() {
            println!(
                "ℹ️  {} is not writable, elevated privileges ({}) will be required",
                dir.display(),
                config.elevation_tool
            );
        }
        TargetStatus::NeedsElevation
    };

    if status != TargetStatus::Writable && which::which(&config.elevation_tool).is_err() {
        println!(
            "⚠️  '{}' was not found, installing into {} will likely fail",
            config.elevation_tool,
            dir.display()
        );
        println!("   Use --target-dir=PATH to pick a directory you can write to.");
    }

    tracing::debug!(?status, target_dir = %dir.display(), "requirements satisfied");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct AvailableFetch(bool);

    impl Fetch for AvailableFetch {
        fn ensure_available(&self) -> Result<()> {
            if self.0 {
                Ok(())
            } else {
                Err(InstallError::MissingTool {
                    tool: "curl".to_string(),
                    hint: String::new(),
                })
            }
        }

        fn fetch(&self, _url: &str, _destination: &Path) -> Result<()> {
            unreachable!("requirement checks never download")
        }
    }

    #[test]
    fn test_missing_download_tool_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = InstallConfig::new(Some(dir.path().to_path_buf()));

        let err = check_requirements(&config, &AvailableFetch(false)).unwrap_err();
        assert!(matches!(err, InstallError::MissingTool { .. }));
    }

    #[test]
    fn test_writable_target() {
        let dir = tempfile::tempdir().unwrap();
        let config = InstallConfig::new(Some(dir.path().to_path_buf()));

        let status = check_requirements(&config, &AvailableFetch(true)).unwrap();
        assert_eq!(status, TargetStatus::Writable);
    }

    #[test]
    fn test_missing_custom_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = InstallConfig::new(Some(dir.path().join("not-there")));

        let err = check_requirements(&config, &AvailableFetch(true)).unwrap_err();
        assert!(matches!(err, InstallError::TargetDirMissing { .. }));
        assert!(err.to_string().contains("mkdir -p"));
    }

    #[test]
    fn test_file_as_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, b"").unwrap();
        let config = InstallConfig::new(Some(file));

        let err = check_requirements(&config, &AvailableFetch(true)).unwrap_err();
        assert!(matches!(err, InstallError::TargetNotDirectory { .. }));
    }
}
