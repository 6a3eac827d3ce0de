use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SAVED_JOBS_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJobs {
    pub version: u32,
    #[serde(default)]
    pub saved: BTreeMap<String, SavedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub saved_at: DateTime<Utc>,
    /// Headline at the time of saving, so the list stays readable if the
    /// posting later disappears from the catalogue.
    pub headline: String,
}

impl Default for SavedJobs {
    fn default() -> Self {
        Self::new()
    }
}

impl SavedJobs {
    pub fn new() -> Self {
        Self {
            version: SAVED_JOBS_VERSION,
            saved: BTreeMap::new(),
        }
    }

    pub fn is_saved(&self, job_id: &str) -> bool {
        self.saved.contains_key(job_id)
    }

    /// Save a job. Saving again refreshes the timestamp and headline.
    pub fn save(&mut self, job_id: String, headline: String) {
        let entry = SavedEntry {
            saved_at: Utc::now(),
            headline,
        };
        self.saved.insert(job_id, entry);
    }

    /// Returns true if the job was previously saved, false otherwise
    pub fn unsave(&mut self, job_id: &str) -> bool {
        self.saved.remove(job_id).is_some()
    }

    /// Entries, most recently saved first.
    pub fn entries_by_recency(&self) -> Vec<(&String, &SavedEntry)> {
        let mut entries: Vec<_> = self.saved.iter().collect();
        entries.sort_by(|a, b| b.1.saved_at.cmp(&a.1.saved_at).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
