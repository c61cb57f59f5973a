//! Lightweight bibliography parser
//!
//! Entries are separated by blank lines. Each entry starts with an
//! `@type{key,` header (parsed with nom); fields are then located anywhere in
//! the entry with tolerant `name = {value}` patterns. A value ends at the
//! first closing brace, so values with nested braces are cut short:
//! `title = {The {LaTeX} Guide}` yields `The {LaTeX`.
//!
//! Entries missing a required field are skipped with a warning and never
//! affect their siblings.

use labsite_domain::Publication;
use lazy_static::lazy_static;
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    IResult,
};
use regex::Regex;
use tracing::{debug, warn};

use super::entry::BibEntryType;

lazy_static! {
    /// A blank line (whitespace-only lines count as blank)
    static ref ENTRY_SEPARATOR: Regex = Regex::new(r"\n[ \t]*\n").unwrap();

    /// An `@` opening a line, so `@` inside comments or values is ignored
    static ref ENTRY_START: Regex = Regex::new(r"(?m)^[ \t]*@").unwrap();

    static ref TITLE: Regex = field_pattern("title");
    static ref AUTHOR: Regex = field_pattern("author");
    static ref YEAR: Regex = field_pattern("year");
    static ref JOURNAL: Regex = field_pattern("journal");
    static ref BOOKTITLE: Regex = field_pattern("booktitle");
    static ref DOI: Regex = field_pattern("doi");
    static ref KEYWORDS: Regex = field_pattern("keywords");
}

/// Separator between author names in the `author` field
const AUTHOR_DELIMITER: &str = " and ";

/// Prefix of parser-assigned publication ids
pub const ID_PREFIX: &str = "pub-";

/// `name = {value}` with a case-insensitive field name that starts a line
/// or follows whitespace, `,` or `{`
fn field_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"(?im)(?:^|[\s,{{]){}\s*=\s*\{{([^}}]*)\}}", name)).unwrap()
}

/// Why an entry did not produce a publication
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("no @type{{...}} header")]
    MissingHeader,
    #[error("@{0} block is not a publication")]
    Directive(String),
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("year '{0}' is not an integer")]
    InvalidYear(String),
}

/// An entry that was dropped during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position of the entry among the non-empty chunks of the input
    pub index: usize,
    pub cite_key: Option<String>,
    pub reason: SkipReason,
}

/// Result of parsing a bibliography, including what was dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub publications: Vec<Publication>,
    pub skipped: Vec<SkippedEntry>,
}

/// Parse bibliography text into publications.
///
/// Never fails: malformed entries are logged and omitted.
pub fn parse(text: &str) -> Vec<Publication> {
    parse_report(text).publications
}

/// Parse bibliography text, also reporting every skipped entry
pub fn parse_report(text: &str) -> ParseReport {
    let normalized = text.replace("\r\n", "\n");
    let mut report = ParseReport::default();

    let chunks = ENTRY_SEPARATOR
        .split(&normalized)
        .filter(|chunk| !chunk.trim().is_empty());

    for (index, chunk) in chunks.enumerate() {
        let next_id = report.publications.len() + 1;
        match parse_chunk(chunk, next_id) {
            Ok(publication) => report.publications.push(publication),
            Err((cite_key, reason)) => {
                match &reason {
                    SkipReason::Directive(_) => {
                        debug!(index, %reason, "Skipping bibliography block")
                    }
                    _ => warn!(
                        index,
                        cite_key = cite_key.as_deref().unwrap_or("?"),
                        %reason,
                        "Skipping malformed bibliography entry"
                    ),
                }
                report.skipped.push(SkippedEntry {
                    index,
                    cite_key,
                    reason,
                });
            }
        }
    }

    report
}

type ChunkResult = Result<Publication, (Option<String>, SkipReason)>;

fn parse_chunk(chunk: &str, next_id: usize) -> ChunkResult {
    let missing_header = || (None::<String>, SkipReason::MissingHeader);

    let start = ENTRY_START
        .find(chunk)
        .map(|m| m.end() - 1)
        .ok_or_else(missing_header)?;
    let (body, tag) = entry_tag(&chunk[start..]).map_err(|_| missing_header())?;

    let entry_type = BibEntryType::from_tag(tag);
    if entry_type.is_directive() {
        return Err((None, SkipReason::Directive(entry_type.as_str().to_string())));
    }

    let (body, cite_key) = open_brace_and_key(body).map_err(|_| missing_header())?;
    let cite_key = cite_key.map(str::to_string);

    build_publication(body, &entry_type, next_id).map_err(|reason| (cite_key, reason))
}

/// `@` followed by the entry type tag
fn entry_tag(input: &str) -> IResult<&str, &str> {
    let (rest, _) = char('@')(input)?;
    let (rest, _) = multispace0(rest)?;
    take_while1(|c: char| c.is_ascii_alphanumeric())(rest)
}

/// Opening brace plus an optional cite key terminated by a comma
fn open_brace_and_key(input: &str) -> IResult<&str, Option<&str>> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let key: IResult<&str, &str> =
        take_while1(|c: char| c != ',' && c != '}' && c != '=' && !c.is_whitespace())(rest);
    match key {
        Ok((after_key, key)) => {
            let (after_ws, _) = multispace0(after_key)?;
            match after_ws.strip_prefix(',') {
                Some(after_comma) => Ok((after_comma, Some(key))),
                None => Ok((rest, None)),
            }
        }
        Err(_) => Ok((rest, None)),
    }
}

fn field<'a>(pattern: &Regex, body: &'a str) -> Option<&'a str> {
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

fn build_publication(
    body: &str,
    entry_type: &BibEntryType,
    next_id: usize,
) -> Result<Publication, SkipReason> {
    let title = field(&TITLE, body).ok_or(SkipReason::MissingField("title"))?;

    let authors = field(&AUTHOR, body)
        .map(split_authors)
        .filter(|authors| !authors.is_empty())
        .ok_or(SkipReason::MissingField("author"))?;

    let year_text = field(&YEAR, body).ok_or(SkipReason::MissingField("year"))?;
    let year: i32 = year_text
        .parse()
        .map_err(|_| SkipReason::InvalidYear(year_text.to_string()))?;

    let venue = field(&JOURNAL, body)
        .or_else(|| field(&BOOKTITLE, body))
        .ok_or(SkipReason::MissingField("journal/booktitle"))?;

    let mut publication = Publication::new(
        format!("{}{}", ID_PREFIX, next_id),
        title,
        authors,
        venue,
        year,
        entry_type.publication_kind(),
    );
    publication.doi = field(&DOI, body).map(str::to_string);
    publication.keywords = field(&KEYWORDS, body)
        .map(split_keywords)
        .unwrap_or_default();

    Ok(publication)
}

fn split_authors(value: &str) -> Vec<String> {
    value
        .split(AUTHOR_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}
