use super::types::Assessment;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load an assessment submission from disk.
///
/// `.json` files are read as JSON; anything else is read as YAML.
pub fn load_assessment(path: &Path) -> Result<Assessment> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read submission at {}", path.display()))?;
    parse_assessment(&content, is_json(path))
        .with_context(|| format!("Failed to parse submission in {}", path.display()))
}

pub fn parse_assessment(content: &str, json: bool) -> Result<Assessment> {
    let assessment = if json {
        serde_json::from_str(content).context("invalid JSON")?
    } else {
        serde_saphyr::from_str(content).context("invalid YAML")?
    };
    Ok(assessment)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
