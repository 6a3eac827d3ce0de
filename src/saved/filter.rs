use super::types::SavedJobs;
use crate::jobs::JobPosting;

/// Keep only the postings the student has saved
pub fn filter_saved_jobs<'a>(jobs: &'a [JobPosting], saved: &SavedJobs) -> Vec<&'a JobPosting> {
    jobs.iter().filter(|job| saved.is_saved(&job.id)).collect()
}
