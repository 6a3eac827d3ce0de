use crate::assessment::Category;
use serde::{Deserialize, Serialize};

/// Minimum category scores a posting asks for. Absent categories are not
/// considered when computing fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_solving: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teamwork: Option<u8>,
}

impl Requirements {
    pub fn get(&self, category: Category) -> Option<u8> {
        match category {
            Category::Technical => self.technical,
            Category::Communication => self.communication,
            Category::ProblemSolving => self.problem_solving,
            Category::Teamwork => self.teamwork,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub requirements: Requirements,
}

impl JobPosting {
    /// "Title @ Company", followed by " (Location)" when one is listed
    pub fn headline(&self) -> String {
        match self.location.as_deref() {
            Some(location) if !location.trim().is_empty() => {
                format!("{} @ {} ({})", self.title, self.company, location.trim())
            }
            _ => format!("{} @ {}", self.title, self.company),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobCatalogue {
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

impl JobCatalogue {
    pub fn find(&self, id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == id)
    }
}
