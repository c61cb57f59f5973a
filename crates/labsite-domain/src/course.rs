//! Course listings

use serde::{Deserialize, Serialize};

/// A course taught by lab members (`courses.json`, `courses`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub code: String,
    pub institution: String,
    #[serde(default)]
    pub terms: Vec<String>,
    pub description: String,
    pub level: String,
    pub credits: f32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Top-level shape of `courses.json`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CoursesFile {
    #[serde(default)]
    pub courses: Vec<Course>,
}
