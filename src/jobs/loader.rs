use super::types::JobCatalogue;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a job catalogue from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML cannot be parsed
/// - Two postings share an id, or a requirement exceeds 100
pub fn load_catalogue(path: &Path) -> Result<JobCatalogue> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job catalogue at {}", path.display()))?;
    parse_catalogue(&content)
        .with_context(|| format!("Invalid job catalogue in {}", path.display()))
}

pub fn parse_catalogue(content: &str) -> Result<JobCatalogue> {
    let catalogue: JobCatalogue = serde_saphyr::from_str(content).context("invalid YAML")?;

    let mut ids = HashSet::new();
    for job in &catalogue.jobs {
        if !ids.insert(job.id.as_str()) {
            bail!("duplicate job id '{}'", job.id);
        }
        for category in crate::assessment::Category::ALL {
            if let Some(required) = job.requirements.get(category) {
                if required > 100 {
                    bail!(
                        "job '{}': requirements.{} must be at most 100, got {}",
                        job.id,
                        category,
                        required
                    );
                }
            }
        }
    }

    tracing::debug!(jobs = catalogue.jobs.len(), "job catalogue loaded");
    Ok(catalogue)
}
