use super::types::{SavedJobs, SAVED_JOBS_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default saved jobs file path (~/.config/fitment/saved_jobs.json)
pub fn get_saved_jobs_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("saved_jobs.json"))
}

/// Load saved jobs from a JSON file
///
/// If the file doesn't exist, returns a new empty list.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_saved_jobs(path: &Path) -> Result<SavedJobs> {
    if !path.exists() {
        return Ok(SavedJobs::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open saved jobs file at {}", path.display()))?;

    let state: SavedJobs = serde_json::from_reader(file).context("Failed to load saved jobs")?;

    if state.version != SAVED_JOBS_VERSION {
        anyhow::bail!("Unsupported saved jobs version: {}", state.version);
    }

    Ok(state)
}

/// Save the list atomically so a crash never leaves a half-written file.
/// Creates the parent directory if it doesn't exist.
pub fn save_saved_jobs(path: &Path, state: &SavedJobs) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize saved jobs")?;

    file.commit().context("Failed to save saved jobs")?;

    tracing::debug!(path = %path.display(), count = state.saved.len(), "saved jobs written");
    Ok(())
}
