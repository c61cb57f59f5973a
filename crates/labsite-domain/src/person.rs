//! People: lab members, profile references, and the people index

use serde::{Deserialize, Serialize};

/// How a person or project page is produced.
///
/// `native` pages are hand-written, `static` pages are prebuilt HTML, and
/// `json` pages are rendered from a [`crate::JsonProfile`] layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Native,
    Static,
    Json,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Static => "static",
            Self::Json => "json",
        }
    }
}

/// Graduation year as found in profiles: either a number or free text ("expected 2026")
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EducationYear {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for EducationYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EducationYear::Number(n) => write!(f, "{}", n),
            EducationYear::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: EducationYear,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

impl Education {
    /// "Degree - Institution (Year) - Focus"
    pub fn summary(&self) -> String {
        let mut line = format!("{} - {} ({})", self.degree, self.institution, self.year);
        if let Some(ref focus) = self.focus {
            line.push_str(" - ");
            line.push_str(focus);
        }
        line
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub duration: String,
}

/// A lab member profile (`profiles/<id>.json`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub email: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub research_interests: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub current_projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_scholar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_statement: Option<String>,
    #[serde(default)]
    pub research_questions: Vec<String>,
    #[serde(rename = "type")]
    pub kind: PageKind,
}

impl Person {
    /// Contact links present on the profile, as (label, href) pairs
    pub fn contact_links(&self) -> Vec<(&'static str, String)> {
        let mut links = vec![("Email", format!("mailto:{}", self.email))];
        let optional = [
            ("Website", &self.website),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Google Scholar", &self.google_scholar),
            ("Twitter", &self.twitter),
        ];
        for (label, href) in optional {
            if let Some(href) = href {
                links.push((label, href.clone()));
            }
        }
        links
    }
}

/// A non-human lab member
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurryMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Entry of the people index: id plus page kind
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PageKind,
}

/// `people-index.json`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleIndex {
    #[serde(default)]
    pub people: Vec<PersonRef>,
    #[serde(rename = "furryMembers", default)]
    pub furry_members: Vec<FurryMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_with_mixed_education_years() {
        let json = r#"{
            "id": "iris",
            "name": "Iris Park",
            "role": "PhD Student",
            "email": "iris@example.edu",
            "image": "/images/iris.jpg",
            "education": [
                {"degree": "BS", "institution": "State U", "year": 2019},
                {"degree": "PhD", "institution": "Tech U", "year": "expected 2026", "focus": "ICS security"}
            ],
            "github": "https://github.com/iris",
            "type": "native"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.kind, PageKind::Native);
        assert_eq!(person.education[0].summary(), "BS - State U (2019)");
        assert_eq!(
            person.education[1].summary(),
            "PhD - Tech U (expected 2026) - ICS security"
        );
        let labels: Vec<_> = person.contact_links().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Email", "GitHub"]);
    }

    #[test]
    fn test_people_index() {
        let json = r#"{
            "people": [{"id": "iris", "type": "json"}, {"id": "burke", "type": "static"}],
            "furryMembers": [{"id": "miso", "name": "Miso", "role": "Morale", "title": "Chief Napper", "description": "Cat", "image": "/miso.jpg"}]
        }"#;
        let index: PeopleIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.people.len(), 2);
        assert_eq!(index.people[1].kind, PageKind::Static);
        assert_eq!(index.furry_members[0].name, "Miso");
    }
}
