//! Publication query engine.
//!
//! A pure function of the publication list and the current [`QueryParams`]:
//! text search, then type and year filters, then a stable sort. Re-run it
//! whenever any parameter changes; each result supersedes the last.
//!
//! Text search matches the lowercased, trimmed query as a substring of the
//! title, abstract, any author, the venue, or any keyword.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use labsite_domain::{Publication, PublicationKind};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::collation;

/// Unrecognized filter or sort value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {what}: {value:?}")]
pub struct FilterParseError {
    pub what: &'static str,
    pub value: String,
}

impl FilterParseError {
    fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}

/// Restrict results to one publication kind.
///
/// Serialized as `"all"` or the kind name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(PublicationKind),
}

impl TypeFilter {
    pub fn matches(&self, kind: PublicationKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        PublicationKind::parse(s)
            .map(TypeFilter::Only)
            .ok_or_else(|| FilterParseError::new("publication type", s))
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = FilterParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Only(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}

/// Restrict results to one year.
///
/// Decodes from an integer or a string the way [`YearFilter::parse`] reads
/// it; any other value means no filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "YearFilterValue")]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    /// Lenient parse: "all", empty, or anything that is not an integer
    /// means no year filter.
    pub fn parse(s: &str) -> Self {
        s.trim().parse().map(YearFilter::Year).unwrap_or_default()
    }

    pub fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(wanted) => *wanted == year,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearFilterValue {
    Number(i64),
    Text(String),
    Other(IgnoredAny),
}

impl From<YearFilterValue> for YearFilter {
    fn from(value: YearFilterValue) -> Self {
        match value {
            YearFilterValue::Number(year) => i32::try_from(year)
                .map(YearFilter::Year)
                .unwrap_or_default(),
            YearFilterValue::Text(text) => YearFilter::parse(&text),
            YearFilterValue::Other(_) => YearFilter::All,
        }
    }
}

impl Serialize for YearFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YearFilter::All => serializer.serialize_str("all"),
            YearFilter::Year(year) => serializer.serialize_i32(*year),
        }
    }
}

impl From<i32> for YearFilter {
    fn from(year: i32) -> Self {
        YearFilter::Year(year)
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => write!(f, "all"),
            YearFilter::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Field to sort by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Year,
    Title,
}

impl SortKey {
    /// Newest first for years, A to Z for titles
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortKey::Year => SortOrder::Descending,
            SortKey::Title => SortOrder::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Year => "year",
            SortKey::Title => "title",
        }
    }
}

impl FromStr for SortKey {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(SortKey::Year),
            "title" => Ok(SortKey::Title),
            _ => Err(FilterParseError::new("sort key", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(FilterParseError::new("sort order", s)),
        }
    }
}

/// Everything the user can adjust in the publication list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub type_filter: TypeFilter,
    #[serde(default)]
    pub year_filter: YearFilter,
    #[serde(default)]
    pub sort_key: SortKey,
    /// `None` means the sort key's default order
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_type(mut self, filter: TypeFilter) -> Self {
        self.type_filter = filter;
        self
    }

    pub fn with_year(mut self, filter: YearFilter) -> Self {
        self.year_filter = filter;
        self
    }

    pub fn with_sort(mut self, key: SortKey, order: Option<SortOrder>) -> Self {
        self.sort_key = key;
        self.sort_order = order;
        self
    }

    pub fn effective_order(&self) -> SortOrder {
        self.sort_order
            .unwrap_or_else(|| self.sort_key.default_order())
    }

    /// Clicking the active sort key flips its order; clicking another key
    /// switches to it with that key's default order.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = Some(self.effective_order().reversed());
        } else {
            self.sort_key = key;
            self.sort_order = Some(key.default_order());
        }
    }

    /// Trimmed search text, empty when no search applies
    pub fn normalized_search(&self) -> &str {
        self.search_text.trim()
    }
}

/// Filtered and sorted view of a publication list
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    pub publications: Vec<&'a Publication>,
    /// The trimmed search text that was applied ("" for none)
    pub matched_query: String,
    /// Size of the list the query ran against
    pub total: usize,
}

impl<'a> QueryOutcome<'a> {
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            shown: self.publications.len(),
            total: self.total,
        }
    }
}

/// Run the query engine over a publication list
pub fn query<'a>(publications: &'a [Publication], params: &QueryParams) -> QueryOutcome<'a> {
    let matched_query = params.normalized_search().to_string();
    let needle = matched_query.to_lowercase();

    let mut results: Vec<&Publication> = publications
        .iter()
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .filter(|p| params.type_filter.matches(p.kind))
        .filter(|p| params.year_filter.matches(p.year))
        .collect();

    let key = params.sort_key;
    let order = params.effective_order();
    // sort_by is stable; flipping the comparator keeps ties in input order
    results.sort_by(|a, b| order.apply(compare_by(key, a, b)));

    QueryOutcome {
        publications: results,
        matched_query,
        total: publications.len(),
    }
}

/// `needle` must already be lowercased
fn matches_search(publication: &Publication, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(publication.title.as_str())
        || contains(publication.abstract_text.as_str())
        || publication.authors.iter().any(|a| contains(a.as_str()))
        || contains(publication.venue.as_str())
        || publication.keywords.iter().any(|k| contains(k.as_str()))
}

fn compare_by(key: SortKey, a: &Publication, b: &Publication) -> Ordering {
    match key {
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Title => collation::compare(&a.title, &b.title),
    }
}

/// Values present in a publication list, for building filter menus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct years, newest first
    pub years: Vec<i32>,
    /// Distinct kinds in order of first appearance
    pub kinds: Vec<PublicationKind>,
}

impl FilterOptions {
    pub fn from_publications(publications: &[Publication]) -> Self {
        let mut years: Vec<i32> = publications.iter().map(|p| p.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();

        let mut kinds = Vec::new();
        for publication in publications {
            if !kinds.contains(&publication.kind) {
                kinds.push(publication.kind);
            }
        }

        Self { years, kinds }
    }
}

/// "Showing X of Y publications"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} publications", self.shown, self.total)
    }
}

/// What the publication list should display
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<'a> {
    /// No list has arrived yet
    Loading,
    /// The last load failed
    Failed(String),
    /// A list is loaded but nothing matches the current parameters
    Empty { matched_query: String, total: usize },
    Loaded(QueryOutcome<'a>),
}

impl<'a> ListState<'a> {
    pub fn from_outcome(outcome: QueryOutcome<'a>) -> Self {
        if outcome.is_empty() {
            ListState::Empty {
                matched_query: outcome.matched_query,
                total: outcome.total,
            }
        } else {
            ListState::Loaded(outcome)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}
