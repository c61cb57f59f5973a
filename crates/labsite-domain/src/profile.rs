//! Layout-driven JSON profiles for people and projects
//!
//! A profile is tagged by `type` (`person` or `project`) and carries an
//! ordered list of sections, each tagged by its own `type`. Decoding goes
//! through [`JsonProfile::from_json`], which deserializes and then checks the
//! few invariants serde cannot express.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Funding;

/// Error type for profile decoding
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Malformed profile JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid profile '{id}': {message}")]
    Invalid { id: String, message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactLink {
    Email,
    Linkedin,
}

/// Content of a `header` section
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderContent {
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub education: bool,
    #[serde(default)]
    pub funding_grid: bool,
    #[serde(default)]
    pub contact_links: Vec<ContactLink>,
}

/// One section of a profile layout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileSection {
    Header {
        #[serde(default)]
        content: HeaderContent,
    },
    Prose {
        title: String,
        content: String,
    },
    TeamTags {
        title: String,
    },
    KeywordTags {
        title: String,
    },
    ResearchInterests {
        title: String,
    },
    ImpactBox {
        title: String,
    },
    ContactBox {
        title: String,
    },
    /// Section types this version does not know how to render
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLayout {
    #[serde(default)]
    pub sections: Vec<ProfileSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStyling {
    #[serde(default)]
    pub badge_colors: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub id: String,
    #[serde(default)]
    pub variant: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub research_interests: Vec<String>,
    #[serde(default)]
    pub layout: ProfileLayout,
    #[serde(default)]
    pub styling: ProfileStyling,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub id: String,
    #[serde(default)]
    pub variant: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<Funding>,
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<u32>,
    #[serde(default)]
    pub layout: ProfileLayout,
    #[serde(default)]
    pub styling: ProfileStyling,
}

/// A profile page described entirely by JSON
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonProfile {
    Person(PersonProfile),
    Project(ProjectProfile),
}

impl JsonProfile {
    /// Decode and validate a profile
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: JsonProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn id(&self) -> &str {
        match self {
            JsonProfile::Person(p) => &p.id,
            JsonProfile::Project(p) => &p.id,
        }
    }

    pub fn sections(&self) -> &[ProfileSection] {
        match self {
            JsonProfile::Person(p) => &p.layout.sections,
            JsonProfile::Project(p) => &p.layout.sections,
        }
    }

    pub fn styling(&self) -> &ProfileStyling {
        match self {
            JsonProfile::Person(p) => &p.styling,
            JsonProfile::Project(p) => &p.styling,
        }
    }

    /// Listing page this profile links back to, as (href, label)
    pub fn back_link(&self) -> (&'static str, &'static str) {
        match self {
            JsonProfile::Person(_) => ("/people", "People"),
            JsonProfile::Project(_) => ("/research", "Research"),
        }
    }

    /// Heading for a header section: explicit header title, then profile title, then name
    pub fn heading<'a>(&'a self, header: &'a HeaderContent) -> &'a str {
        if let Some(ref title) = header.title {
            return title;
        }
        match self {
            JsonProfile::Person(p) => p.title.as_deref().unwrap_or(&p.name),
            JsonProfile::Project(p) => &p.title,
        }
    }

    /// CSS class for a badge, falling back to a neutral style
    pub fn badge_class(&self, badge: &str) -> &str {
        self.styling()
            .badge_colors
            .get(badge)
            .map(String::as_str)
            .unwrap_or("bg-gray-100 text-gray-600")
    }

    fn validate(&self) -> Result<(), ProfileError> {
        let invalid = |message: &str| ProfileError::Invalid {
            id: self.id().to_string(),
            message: message.to_string(),
        };

        if self.id().trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }

        match self {
            JsonProfile::Person(p) if p.name.trim().is_empty() => {
                return Err(invalid("person profiles need a name"));
            }
            JsonProfile::Project(p) if p.title.trim().is_empty() => {
                return Err(invalid("project profiles need a title"));
            }
            _ => {}
        }

        let headers = self
            .sections()
            .iter()
            .filter(|s| matches!(s, ProfileSection::Header { .. }))
            .count();
        if headers > 1 {
            return Err(invalid("at most one header section is allowed"));
        }

        if let JsonProfile::Person(_) = self {
            let funding_grid = self.sections().iter().any(|s| {
                matches!(s, ProfileSection::Header { content } if content.funding_grid)
            });
            if funding_grid {
                return Err(invalid("funding grids are only valid on project profiles"));
            }
        }

        Ok(())
    }
}
