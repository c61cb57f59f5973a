//! Broken-link checks for a content directory

use std::fmt;

use serde::Serialize;
use tracing::info;

use super::ContentStore;
use crate::error::Result;

/// Something a page links to that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissingLink {
    /// The people index names a person with no profile file
    Profile { person_id: String },
    /// A project team lists a person with no profile file
    TeamMember {
        project_id: String,
        person_id: String,
    },
}

impl fmt::Display for MissingLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingLink::Profile { person_id } => {
                write!(f, "missing profile for indexed person '{}'", person_id)
            }
            MissingLink::TeamMember {
                project_id,
                person_id,
            } => write!(
                f,
                "project '{}' lists team member '{}' with no profile",
                project_id, person_id
            ),
        }
    }
}

pub(super) fn check(store: &ContentStore) -> Result<Vec<MissingLink>> {
    let paths = store.paths();
    let has_profile = |id: &str| paths.profile(id).is_some_and(|path| path.is_file());

    let mut missing = Vec::new();

    let people = store.people_kinds()?;
    for entry in &people {
        if !has_profile(&entry.id) {
            missing.push(MissingLink::Profile {
                person_id: entry.id.clone(),
            });
        }
    }

    let projects = store.projects()?;
    for project in &projects {
        for person_id in &project.team {
            if !has_profile(person_id) {
                missing.push(MissingLink::TeamMember {
                    project_id: project.id.clone(),
                    person_id: person_id.clone(),
                });
            }
        }
    }

    info!(
        people = people.len(),
        projects = projects.len(),
        missing = missing.len(),
        "Checked content links"
    );
    Ok(missing)
}
