//! BibTeX formatting module
//!
//! Writes publications back out as bibliography text the parser reads.

use std::collections::HashMap;

use labsite_domain::{Publication, PublicationKind};

use super::entry::BibEntryType;

/// Format a single publication with a cite key derived from it
pub fn format_publication(publication: &Publication) -> String {
    format_with_key(publication, &base_cite_key(publication))
}

/// Format publications separated by blank lines.
///
/// Cite keys that collide get `a`, `b`, ... suffixes.
pub fn format_publications(publications: &[Publication]) -> String {
    let mut seen: HashMap<String, usize> = HashMap::new();

    publications
        .iter()
        .map(|publication| {
            let base = base_cite_key(publication);
            let count = seen.entry(base.clone()).or_insert(0);
            let key = if *count == 0 {
                base
            } else {
                format!("{}{}", base, suffix(*count))
            };
            *count += 1;
            format_with_key(publication, &key)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_with_key(publication: &Publication, cite_key: &str) -> String {
    let entry_type = BibEntryType::for_kind(publication.kind);
    let venue_field = match publication.kind {
        PublicationKind::Journal => "journal",
        _ => "booktitle",
    };

    let mut fields: Vec<(&str, String)> = vec![
        ("title", publication.title.clone()),
        ("author", publication.authors.join(" and ")),
        (venue_field, publication.venue.clone()),
        ("year", publication.year.to_string()),
    ];
    if let Some(ref doi) = publication.doi {
        fields.push(("doi", doi.clone()));
    }
    if !publication.keywords.is_empty() {
        fields.push(("keywords", publication.keywords.join(", ")));
    }
    if let Some(ref url) = publication.url {
        fields.push(("url", url.clone()));
    }

    let mut result = String::new();
    result.push('@');
    result.push_str(entry_type.as_str());
    result.push('{');
    result.push_str(cite_key);
    result.push_str(",\n");

    for (key, value) in fields {
        result.push_str("    ");
        result.push_str(key);
        result.push_str(" = ");
        result.push_str(&format_field_value(&value));
        result.push_str(",\n");
    }

    result.push('}');
    result
}

/// Brace a value; line breaks are folded so a value never contains a blank line
fn format_field_value(value: &str) -> String {
    let folded = value.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut result = String::with_capacity(folded.len() + 2);
    result.push('{');
    result.push_str(&folded);
    result.push('}');
    result
}

/// Lowercase ASCII surname of the first author followed by the year
fn base_cite_key(publication: &Publication) -> String {
    let surname: String = publication
        .authors
        .first()
        .and_then(|name| name.split_whitespace().last())
        .unwrap_or("anon")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    let surname = if surname.is_empty() {
        "anon".to_string()
    } else {
        surname
    };
    format!("{}{}", surname, publication.year)
}

/// 1 -> "a", 2 -> "b", ..., 26 -> "z", 27 -> "aa"
fn suffix(mut n: usize) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}
