use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InstallError>;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required tool '{tool}' not found. {hint}")]
    MissingTool { tool: String, hint: String },

    #[error("Target directory {path:?} does not exist. Create it first with: mkdir -p {}", .path.display())]
    TargetDirMissing { path: PathBuf },

    #[error("Target {path:?} exists but is not a directory")]
    TargetNotDirectory { path: PathBuf },

    #[error("Download failed: {url} ({message})")]
    DownloadFailed { url: String, message: String },

    #[error("Downloaded file from {url} is empty, the download may be corrupted")]
    EmptyDownload { url: String },

    #[error("Elevated command failed: {command} ({message})")]
    ElevationFailed { command: String, message: String },

    #[error("Installed file is not executable: {path:?}")]
    NotExecutable { path: PathBuf },

    #[error("Could not read confirmation: {message}")]
    PromptFailed { message: String },

    #[error("Temporary file error: {message}")]
    TempFile { message: String },
}

impl InstallError {
    pub fn download_failed<U: Into<String>, S: Into<String>>(url: U, message: S) -> Self {
        InstallError::DownloadFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn elevation_failed<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        InstallError::ElevationFailed {
            command: command.into(),
            message: message.into(),
        }
    }
}

impl From<dialoguer::Error> for InstallError {
    fn from(error: dialoguer::Error) -> Self {
        InstallError::PromptFailed {
            message: error.to_string(),
        }
    }
}
