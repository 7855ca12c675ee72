use crate::error::{InstallError, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Render a command line for messages and logs.
pub fn display_command(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Run a command through the elevation tool, inheriting the terminal so a
/// password prompt can be answered.
pub fn run_elevated(elevation_tool: &str, args: &[OsString]) -> Result<()> {
    let command_line = display_command(elevation_tool, args);
    tracing::debug!(command = %command_line, "running elevated command");

    let status = Command::new(elevation_tool)
        .args(args)
        .stdin(Stdio::inherit())
        .status()
        .map_err(|e| InstallError::elevation_failed(&command_line, e.to_string()))?;

    if !status.success() {
        return Err(InstallError::elevation_failed(
            &command_line,
            format!("exited with status {:?}", status.code()),
        ));
    }

    Ok(())
}

/// Whether `dir` is one of the entries of the `PATH` environment variable.
pub fn path_contains(dir: &Path) -> bool {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).any(|entry| entry == dir))
        .unwrap_or(false)
}
