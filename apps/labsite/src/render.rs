//! Plain-text rendering of publication listings

use labsite_core::{highlight_publication, ListState, Publication, Segment};

const MATCH_OPEN: &str = "[[";
const MATCH_CLOSE: &str = "]]";

/// Segments with matches wrapped in `[[...]]`
pub fn marked(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.matched {
            out.push_str(MATCH_OPEN);
            out.push_str(&segment.text);
            out.push_str(MATCH_CLOSE);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

fn publication_entry(publication: &Publication, query: &str) -> String {
    let highlights = highlight_publication(publication, query);

    let mut lines = vec![
        format!(
            "[{}] {} ({})",
            publication.kind.label(),
            marked(&highlights.title),
            publication.year
        ),
        format!("    {}", marked(&highlights.authors)),
        format!("    {}", marked(&highlights.venue)),
    ];
    if !highlights.abstract_text.is_empty() && highlights.matched_fields().contains(&"abstract") {
        lines.push(format!("    {}", marked(&highlights.abstract_text)));
    }
    if !highlights.keywords.is_empty() {
        let keywords: Vec<String> = highlights.keywords.iter().map(|k| marked(k)).collect();
        lines.push(format!("    Keywords: {}", keywords.join(", ")));
    }
    if let Some(url) = publication.doi_url() {
        lines.push(format!("    {}", url));
    }
    if let Some(citations) = publication.citations {
        lines.push(format!("    Cited by {}", citations));
    }
    lines.join("\n")
}

/// The listing for a list state, as printed to stdout
pub fn list_state(state: &ListState<'_>) -> String {
    match state {
        ListState::Loading => "Loading publications...".to_string(),
        ListState::Failed(message) => format!("Failed to load publications: {}", message),
        ListState::Empty { matched_query, .. } if !matched_query.is_empty() => format!(
            "No publications found matching \"{}\" and the current filters.",
            matched_query
        ),
        ListState::Empty { .. } => "No publications found matching your filters.".to_string(),
        ListState::Loaded(outcome) => {
            let mut blocks: Vec<String> = outcome
                .publications
                .iter()
                .map(|p| publication_entry(p, &outcome.matched_query))
                .collect();
            blocks.push(outcome.summary().to_string());
            blocks.join("\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labsite_core::{highlight, query, PublicationKind, QueryParams};

    #[test]
    fn test_marked() {
        assert_eq!(
            marked(&highlight("Secure SCADA Systems", "sca")),
            "Secure [[SCA]]DA Systems"
        );
        assert_eq!(marked(&highlight("Secure", "")), "Secure");
    }

    #[test]
    fn test_loaded_listing() {
        let publications = vec![Publication::new(
            "pub-1",
            "Secure SCADA",
            vec!["Sarah Chen".to_string()],
            "ICS Security",
            2023,
            PublicationKind::Conference,
        )
        .with_doi("10.1/abc")];
        let outcome = query(&publications, &QueryParams::new().with_search("scada"));
        let text = list_state(&ListState::from_outcome(outcome));

        assert!(text.starts_with("[Conference] Secure [[SCADA]] (2023)\n"));
        assert!(text.contains("https://doi.org/10.1/abc"));
        assert!(text.ends_with("Showing 1 of 1 publications"));
    }

    #[test]
    fn test_empty_listing() {
        let state = ListState::Empty {
            matched_query: String::new(),
            total: 3,
        };
        assert_eq!(list_state(&state), "No publications found matching your filters.");
    }
}
