//! Publication domain model

use serde::{de, Deserialize, Deserializer, Serialize};

/// Kind of publication, serialized as the lowercase `type` discriminator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationKind {
    Journal,
    Conference,
    Workshop,
    Preprint,
}

impl PublicationKind {
    pub const ALL: [PublicationKind; 4] = [
        PublicationKind::Journal,
        PublicationKind::Conference,
        PublicationKind::Workshop,
        PublicationKind::Preprint,
    ];

    /// Parse a kind from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "journal" => Some(Self::Journal),
            "conference" => Some(Self::Conference),
            "workshop" => Some(Self::Workshop),
            "preprint" => Some(Self::Preprint),
            _ => None,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Conference => "conference",
            Self::Workshop => "workshop",
            Self::Preprint => "preprint",
        }
    }

    /// Label shown next to a publication in listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Journal => "Journal",
            Self::Conference => "Conference",
            Self::Workshop => "Workshop",
            Self::Preprint => "Preprint",
        }
    }
}

impl std::fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A publication (journal article, conference paper, workshop paper, preprint)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Blank until a loader assigns one
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: PublicationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Empty for records sourced from a bibliography
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A year as written in content files: `2023` or `"2023"`
#[derive(Deserialize)]
#[serde(untagged)]
enum YearValue {
    Number(i32),
    Text(String),
}

fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    match YearValue::deserialize(deserializer)? {
        YearValue::Number(year) => Ok(year),
        YearValue::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("year {:?} is not an integer", text))),
    }
}

impl Publication {
    /// Create a publication with the mandatory fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        authors: Vec<String>,
        venue: impl Into<String>,
        year: i32,
        kind: PublicationKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors,
            venue: venue.into(),
            year,
            kind,
            doi: None,
            abstract_text: String::new(),
            keywords: Vec::new(),
            citations: None,
            url: None,
        }
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = abstract_text.into();
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_citations(mut self, citations: u32) -> Self {
        self.citations = Some(citations);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Authors formatted for display ("A, B, C")
    pub fn authors_display(&self) -> String {
        self.authors.join(", ")
    }

    /// Resolver link for the DOI, if any
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{}", doi))
    }
}
