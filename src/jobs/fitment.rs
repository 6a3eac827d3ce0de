use super::types::{JobPosting, Requirements};
use crate::assessment::{Category, CategoryScores};
use serde::Serialize;

/// Compatibility of a student's scores with a posting's requirements, 0–100.
///
/// Each required category contributes `min(score, required) / required`;
/// the result is the mean of those ratios. Exceeding a requirement earns
/// nothing extra. A posting without requirements fits everyone.
pub fn compatibility(scores: &CategoryScores, requirements: &Requirements) -> u8 {
    let ratios: Vec<f64> = Category::ALL
        .iter()
        .filter_map(|&category| {
            let required = requirements.get(category)?;
            if required == 0 {
                return None;
            }
            let have = scores.get(category).max(0) as f64;
            Some(have.min(required as f64) / required as f64)
        })
        .collect();

    if ratios.is_empty() {
        return 100;
    }

    let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
    (mean * 100.0).round().clamp(0.0, 100.0) as u8
}

/// A required category the student scores below, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub category: Category,
    pub gap: i32,
}

/// Categories where the student falls short of a requirement.
pub fn shortfalls(scores: &CategoryScores, requirements: &Requirements) -> Vec<Shortfall> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let required = i32::from(requirements.get(category)?);
            let gap = required - scores.get(category);
            (gap > 0).then_some(Shortfall { category, gap })
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedJob<'a> {
    pub job: &'a JobPosting,
    pub compatibility: u8,
    pub shortfalls: Vec<Shortfall>,
}

/// Rank postings by compatibility, best first.
/// Ties go to title (ascending), then id, so output is stable.
pub fn rank_jobs<'a, I>(jobs: I, scores: &CategoryScores) -> Vec<RankedJob<'a>>
where
    I: IntoIterator<Item = &'a JobPosting>,
{
    let mut ranked: Vec<RankedJob<'a>> = jobs
        .into_iter()
        .map(|job| RankedJob {
            job,
            compatibility: compatibility(scores, &job.requirements),
            shortfalls: shortfalls(scores, &job.requirements),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.compatibility
            .cmp(&a.compatibility)
            .then_with(|| a.job.title.cmp(&b.job.title))
            .then_with(|| a.job.id.cmp(&b.job.id))
    });

    ranked
}
