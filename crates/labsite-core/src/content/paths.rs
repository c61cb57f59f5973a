//! On-disk layout of a content directory

use std::path::{Path, PathBuf};

pub const LAB_INFO_FILE: &str = "lab-info.json";
pub const PROJECTS_FILE: &str = "research-projects.json";
pub const PEOPLE_INDEX_FILE: &str = "people-index.json";
pub const PUBLICATIONS_FILE: &str = "publications.json";
pub const BIBLIOGRAPHY_FILE: &str = "publications.bib";
pub const COURSES_FILE: &str = "courses.json";
pub const PROFILES_DIR: &str = "profiles";
pub const PROJECT_IMAGES_DIR: &str = "images/projects";

/// Resolves content file locations under a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    root: PathBuf,
}

impl ContentPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lab_info(&self) -> PathBuf {
        self.root.join(LAB_INFO_FILE)
    }

    pub fn projects(&self) -> PathBuf {
        self.root.join(PROJECTS_FILE)
    }

    pub fn people_index(&self) -> PathBuf {
        self.root.join(PEOPLE_INDEX_FILE)
    }

    pub fn publications(&self) -> PathBuf {
        self.root.join(PUBLICATIONS_FILE)
    }

    pub fn bibliography(&self) -> PathBuf {
        self.root.join(BIBLIOGRAPHY_FILE)
    }

    pub fn courses(&self) -> PathBuf {
        self.root.join(COURSES_FILE)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join(PROFILES_DIR)
    }

    pub fn project_images_dir(&self) -> PathBuf {
        self.root.join(PROJECT_IMAGES_DIR)
    }

    /// `images/projects/<id>`, unless the id is unsafe
    pub fn project_images(&self, id: &str) -> Option<PathBuf> {
        is_safe_id(id).then(|| self.project_images_dir().join(id))
    }

    /// `profiles/<id>.json`, or `None` when the id could escape the
    /// profiles directory
    pub fn profile(&self, id: &str) -> Option<PathBuf> {
        is_safe_id(id).then(|| self.profiles_dir().join(format!("{}.json", id)))
    }
}

/// Ids name files, so they are limited to `[A-Za-z0-9_-]`
pub fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
