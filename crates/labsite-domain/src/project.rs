//! Research projects

use super::PageKind;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Proposed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Proposed => "proposed",
        }
    }
}

/// Funding source of a project
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funding {
    pub agency: String,
    pub amount: String,
    pub duration: String,
}

/// A research project (`research-projects.json`, `featuredProjects`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<Funding>,
    /// Person ids
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub publications: u32,
    #[serde(default)]
    pub impact: String,
    #[serde(rename = "type")]
    pub kind: PageKind,
}

impl Project {
    pub fn has_member(&self, person_id: &str) -> bool {
        self.team.iter().any(|id| id == person_id)
    }
}

/// Top-level shape of `research-projects.json`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectsFile {
    #[serde(rename = "featuredProjects", default)]
    pub featured_projects: Vec<Project>,
}
