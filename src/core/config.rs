use std::path::{Path, PathBuf};

pub const BINARY_NAME: &str = "cleen";
pub const DEFAULT_TARGET_DIR: &str = "/usr/local/bin";
pub const DEFAULT_DOWNLOAD_URL: &str =
    "https://github.com/Ivan-Pasco/clean-language-manager/releases/latest/download/cleen";

pub const DEFAULT_ELEVATION_TOOL: &str = "sudo";

/// Environment variable that replaces the download URL (mirrors, local testing).
pub const URL_ENV_VAR: &str = "CLEEN_INSTALL_URL";

/// Settings for a single installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub target_dir: PathBuf,
    pub download_url: String,
    /// Program that runs commands with elevated privileges.
    pub elevation_tool: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        InstallConfig {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            elevation_tool: DEFAULT_ELEVATION_TOOL.to_string(),
        }
    }
}

impl InstallConfig {
    pub fn new(target_dir: Option<PathBuf>) -> Self {
        InstallConfig {
            target_dir: target_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR)),
            ..Default::default()
        }
    }

    /// Build the configuration for this process, honouring `CLEEN_INSTALL_URL`.
    pub fn load(target_dir: Option<PathBuf>) -> Self {
        let mut config = Self::new(target_dir);
        if let Ok(url) = std::env::var(URL_ENV_VAR) {
            let url = url.trim();
            if !url.is_empty() {
                tracing::debug!(url, "download URL overridden from environment");
                config.download_url = url.to_string();
            }
        }
        config
    }

    pub fn with_download_url<S: Into<String>>(mut self, url: S) -> Self {
        self.download_url = url.into();
        self
    }

    pub fn with_elevation_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.elevation_tool = tool.into();
        self
    }

    pub fn target_path(&self) -> PathBuf {
        self.target_dir.join(BINARY_NAME)
    }

    pub fn is_default_target(&self) -> bool {
        self.target_dir == Path::new(DEFAULT_TARGET_DIR)
    }
}
