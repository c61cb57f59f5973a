//! Content loading
//!
//! The site is built from JSON files under a content root (see
//! [`ContentPaths`]). Collection files that cannot be read or decoded are
//! errors. Individual records are more forgiving: a missing profile or an
//! invalid publication is logged and skipped so one bad record never hides
//! the rest.

mod links;
mod paths;
mod report;

pub use links::MissingLink;
pub use paths::{is_safe_id, ContentPaths};
pub use report::project_report;

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use labsite_domain::{
    validate_publication, Course, CoursesFile, FurryMember, JsonProfile, LabInfo, PageKind,
    PeopleIndex, Person, PersonRef, Project, ProjectsFile, Publication, ValidationSeverity,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{ContentError, Result};

/// Top-level shape of `publications.json`, decoded record by record
#[derive(Deserialize)]
struct PublicationsFile {
    #[serde(rename = "recentPublications", default)]
    recent_publications: Vec<serde_json::Value>,
}

/// Read access to a content directory
#[derive(Debug, Clone)]
pub struct ContentStore {
    paths: ContentPaths,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: ContentPaths::new(root),
        }
    }

    pub fn paths(&self) -> &ContentPaths {
        &self.paths
    }

    pub fn lab_info(&self) -> Result<LabInfo> {
        read_json(&self.paths.lab_info())
    }

    // === Projects ===

    pub fn projects(&self) -> Result<Vec<Project>> {
        let file: ProjectsFile = read_json(&self.paths.projects())?;
        Ok(file.featured_projects)
    }

    pub fn project(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.projects()?.into_iter().find(|p| p.id == id))
    }

    /// The project, only if its page is of the given kind
    pub fn project_by_kind(&self, id: &str, kind: PageKind) -> Result<Option<Project>> {
        Ok(self.project(id)?.filter(|p| p.kind == kind))
    }

    /// Projects whose team includes the person
    pub fn projects_by_person(&self, person_id: &str) -> Result<Vec<Project>> {
        Ok(self
            .projects()?
            .into_iter()
            .filter(|p| p.has_member(person_id))
            .collect())
    }

    // === People ===

    fn people_index(&self) -> Result<PeopleIndex> {
        read_json(&self.paths.people_index())
    }

    /// Every indexed person whose profile loads, in index order
    pub fn people(&self) -> Result<Vec<Person>> {
        let index = self.people_index()?;
        let people: Vec<Person> = index
            .people
            .iter()
            .filter_map(|entry| self.person(&entry.id))
            .collect();
        info!(
            indexed = index.people.len(),
            loaded = people.len(),
            "Loaded people"
        );
        Ok(people)
    }

    /// Load `profiles/<id>.json`; any failure is logged and yields `None`
    pub fn person(&self, id: &str) -> Option<Person> {
        let Some(path) = self.paths.profile(id) else {
            warn!(id, "Ignoring profile with invalid id");
            return None;
        };
        match read_json::<Person>(&path) {
            Ok(person) => Some(person),
            Err(ContentError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!(id, path = %path.display(), "Profile not found");
                None
            }
            Err(e) => {
                warn!(id, error = %e, "Failed to load profile");
                None
            }
        }
    }

    /// The person, only if their page is of the given kind
    pub fn person_by_kind(&self, id: &str, kind: PageKind) -> Option<Person> {
        self.person(id).filter(|p| p.kind == kind)
    }

    /// Index entries (id and page kind) without loading profiles
    pub fn people_kinds(&self) -> Result<Vec<PersonRef>> {
        Ok(self.people_index()?.people)
    }

    pub fn furry_members(&self) -> Result<Vec<FurryMember>> {
        Ok(self.people_index()?.furry_members)
    }

    /// Profiles for a project team; unresolvable ids are skipped
    pub fn resolve_team_members(&self, ids: &[String]) -> Vec<Person> {
        ids.iter().filter_map(|id| self.person(id)).collect()
    }

    /// Layout-driven page for a person or project
    pub fn json_profile(&self, id: &str) -> Result<JsonProfile> {
        let path = self
            .paths
            .profile(id)
            .ok_or_else(|| ContentError::InvalidId(id.to_string()))?;
        let text = read_text(&path)?;
        JsonProfile::from_json(&text).map_err(|source| ContentError::Profile { path, source })
    }

    // === Publications ===

    /// Publications from `publications.json`.
    ///
    /// Records that fail to decode or fail validation are skipped with a
    /// warning. A record without an id, or repeating an earlier id, gets a
    /// fresh `pub-<n>` id that no record in the file uses.
    pub fn publications(&self) -> Result<Vec<Publication>> {
        let path = self.paths.publications();
        let file: PublicationsFile = read_json(&path)?;

        let mut decoded = Vec::with_capacity(file.recent_publications.len());
        for (index, record) in file.recent_publications.into_iter().enumerate() {
            match serde_json::from_value::<Publication>(record) {
                Ok(publication) => decoded.push((index, publication)),
                Err(e) => warn!(index, error = %e, "Skipping malformed publication record"),
            }
        }

        let mut taken: HashSet<String> = decoded
            .iter()
            .map(|(_, p)| p.id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        let mut seen = HashSet::new();
        let mut publications = Vec::with_capacity(decoded.len());
        for (index, mut publication) in decoded {
            publication.id = publication.id.trim().to_string();
            if publication.id.is_empty() {
                publication.id = fresh_id(&mut taken, index + 1);
                debug!(index, id = %publication.id, "Assigned publication id");
            }

            let issues = validate_publication(&publication);
            if issues.iter().any(|i| i.severity == ValidationSeverity::Error) {
                let problems: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                warn!(
                    index,
                    id = %publication.id,
                    problems = %problems.join("; "),
                    "Skipping invalid publication record"
                );
                continue;
            }
            for issue in &issues {
                debug!(id = %publication.id, %issue, "Publication validation warning");
            }

            if !seen.insert(publication.id.clone()) {
                let id = fresh_id(&mut taken, index + 1);
                warn!(index, duplicate = %publication.id, %id, "Renaming duplicate publication id");
                seen.insert(id.clone());
                publication.id = id;
            }
            publications.push(publication);
        }

        info!(count = publications.len(), path = %path.display(), "Loaded publications");
        Ok(publications)
    }

    /// Publications parsed from `publications.bib`
    pub fn publications_from_bibtex(&self) -> Result<Vec<Publication>> {
        let path = self.paths.bibliography();
        let report = labsite_bibtex::parse_report(&read_text(&path)?);
        info!(
            count = report.publications.len(),
            skipped = report.skipped.len(),
            path = %path.display(),
            "Parsed bibliography"
        );
        Ok(report.publications)
    }

    pub fn courses(&self) -> Result<Vec<Course>> {
        let file: CoursesFile = read_json(&self.paths.courses())?;
        Ok(file.courses)
    }

    // === Maintenance ===

    /// Index entries and project team members lacking a profile file
    pub fn check_links(&self) -> Result<Vec<MissingLink>> {
        links::check(self)
    }

    /// Markdown summary of every project
    pub fn project_report(&self) -> Result<String> {
        let projects = self.projects()?;
        Ok(project_report(&projects, |project| {
            self.project_images(&project.id)
        }))
    }

    /// Non-hidden file names under `images/projects/<id>`, sorted.
    ///
    /// A missing or unreadable directory lists nothing.
    pub fn project_images(&self, id: &str) -> Vec<String> {
        let Some(dir) = self.paths.project_images(id) else {
            warn!(id, "Ignoring project with invalid id");
            return Vec::new();
        };
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(id, path = %dir.display(), error = %e, "No project images");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.starts_with('.'))
            .collect();
        names.sort();
        names
    }
}

/// `pub-<n>` for the first `n >= start` not already taken; the id is
/// reserved before returning
fn fresh_id(taken: &mut HashSet<String>, start: usize) -> String {
    let mut n = start;
    loop {
        let id = format!("{}{}", labsite_bibtex::ID_PREFIX, n);
        if taken.insert(id.clone()) {
            return id;
        }
        n += 1;
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}
