//! Validation for publications

use super::Publication;
use serde::{Deserialize, Serialize};

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn error(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a publication and return errors/warnings
pub fn validate_publication(publication: &Publication) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Mandatory fields
    if publication.id.trim().is_empty() {
        errors.push(ValidationError::error("id", "Identifier is required"));
    }

    if publication.title.trim().is_empty() {
        errors.push(ValidationError::error("title", "Title is required"));
    }

    if publication.authors.iter().all(|a| a.trim().is_empty()) {
        errors.push(ValidationError::error("authors", "At least one author is required"));
    }

    if publication.venue.trim().is_empty() {
        errors.push(ValidationError::error("venue", "Venue is required"));
    }

    if !(1000..=9999).contains(&publication.year) {
        errors.push(ValidationError::warning("year", "Year should have four digits"));
    }

    if let Some(ref doi) = publication.doi {
        if !doi.starts_with("10.") {
            errors.push(ValidationError::warning("doi", "DOI should start with '10.'"));
        }
    }

    errors
}

/// Check if a publication is valid (no errors)
pub fn is_valid(publication: &Publication) -> bool {
    validate_publication(publication)
        .iter()
        .all(|e| e.severity != ValidationSeverity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PublicationKind;

    fn publication(title: &str, authors: &[&str], venue: &str, year: i32) -> Publication {
        Publication::new(
            "pub-1",
            title,
            authors.iter().map(|a| a.to_string()).collect(),
            venue,
            year,
            PublicationKind::Journal,
        )
    }

    #[test]
    fn test_validate_missing_mandatory_fields() {
        let errors = validate_publication(&publication(" ", &[], "", 2020));
        assert!(errors.iter().any(|e| e.field == "title"));
        assert!(errors.iter().any(|e| e.field == "authors"));
        assert!(errors.iter().any(|e| e.field == "venue"));
        assert!(!errors.iter().any(|e| e.field == "year"));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(&publication("T", &["A"], "V", 2020)));
        assert!(!is_valid(&publication("T", &[""], "V", 2020)));
    }

    #[test]
    fn test_short_year_is_only_a_warning() {
        let p = publication("T", &["A"], "V", 99);
        let errors = validate_publication(&p);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, ValidationSeverity::Warning);
        assert!(is_valid(&p));
    }

    #[test]
    fn test_doi_prefix_warning() {
        let p = publication("T", &["A"], "V", 2020).with_doi("doi:10.1/x");
        let errors = validate_publication(&p);
        assert_eq!(errors[0].field, "doi");
    }
}
