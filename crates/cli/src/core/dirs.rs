use anyhow::Context;
use std::env;
use std::path::PathBuf;

/// Get the location of the crate's data dir
pub(crate) fn data_dir() -> anyhow::Result<PathBuf> {
    Ok(dirs::data_local_dir()
        .context("No local data dir known for the current OS")?
        .join("vapour"))
}

/// Get the location the dashboard writes its logs to
pub(crate) fn log_dir() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("logs"))
}

/// Get the location of the current executable
pub(crate) fn executable_dir() -> String {
    match env::current_exe() {
        Ok(exe_path) => exe_path.display().to_string(),
        Err(_) => String::from("unknown executable dir"),
    }
}
