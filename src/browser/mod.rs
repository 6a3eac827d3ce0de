use anyhow::{Context, Result};

use crate::jobs::JobPosting;

/// URL to open for a posting, if it has one
pub fn job_url(job: &JobPosting) -> Result<&str> {
    job.url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .with_context(|| format!("Job '{}' has no URL", job.id))
}

/// Open a job posting in the user's default browser
///
/// # Errors
/// Returns error if the posting has no URL or the browser cannot be opened
pub fn open_job(job: &JobPosting) -> Result<()> {
    let url = job_url(job)?;
    tracing::debug!(job = %job.id, url, "opening job posting");
    webbrowser::open(url).with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}
