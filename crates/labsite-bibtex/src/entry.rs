//! Bibliography entry types

use labsite_domain::PublicationKind;

/// Entry type tag of a bibliography record (`@article`, `@inproceedings`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BibEntryType {
    Article,
    Book,
    InBook,
    InCollection,
    InProceedings,
    Misc,
    PhdThesis,
    MastersThesis,
    TechReport,
    Unpublished,
    /// `@comment`, `@string` and `@preamble` blocks
    Directive(String),
    Other(String),
}

impl BibEntryType {
    /// Parse an entry type from its tag (case-insensitive)
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.to_lowercase();
        match lower.as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "inproceedings" | "conference" => Self::InProceedings,
            "misc" => Self::Misc,
            "phdthesis" => Self::PhdThesis,
            "mastersthesis" => Self::MastersThesis,
            "techreport" => Self::TechReport,
            "unpublished" => Self::Unpublished,
            "comment" | "string" | "preamble" => Self::Directive(lower),
            _ => Self::Other(lower),
        }
    }

    /// Canonical tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Misc => "misc",
            Self::PhdThesis => "phdthesis",
            Self::MastersThesis => "mastersthesis",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
            Self::Directive(tag) | Self::Other(tag) => tag,
        }
    }

    pub fn is_directive(&self) -> bool {
        matches!(self, Self::Directive(_))
    }

    /// Articles are journal papers; every other record type is filed as a conference paper
    pub fn publication_kind(&self) -> PublicationKind {
        match self {
            Self::Article => PublicationKind::Journal,
            _ => PublicationKind::Conference,
        }
    }

    /// Tag used when writing a publication of the given kind
    pub fn for_kind(kind: PublicationKind) -> Self {
        match kind {
            PublicationKind::Journal => Self::Article,
            PublicationKind::Preprint => Self::Misc,
            PublicationKind::Conference | PublicationKind::Workshop => Self::InProceedings,
        }
    }
}
