//! Core library for the lab site
//!
//! Provides:
//! - Publication queries: search, type/year filters, stable sorting
//! - Search match highlighting
//! - Content loading from a JSON content directory
//! - Site identity configuration
//! - Load sessions that discard stale results

pub mod collation;
pub mod content;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod session;
pub mod site_config;

pub use content::{ContentPaths, ContentStore, MissingLink};
pub use error::{ConfigError, ContentError};
pub use filter::{
    query, FilterOptions, FilterParseError, ListState, QueryOutcome, QueryParams, ResultSummary,
    SortKey, SortOrder, TypeFilter, YearFilter,
};
pub use highlight::{highlight, highlight_publication, Highlighter, PublicationHighlights, Segment};
pub use session::{LoadOutcome, LoadSession, LoadTicket};
pub use site_config::SiteConfig;

// Re-export the record types callers work with
pub use labsite_domain::{Publication, PublicationKind};
