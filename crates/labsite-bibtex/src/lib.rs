//! Bibliography parsing and formatting
//!
//! Features:
//! - Blank-line separated entries with tolerant `field = {value}` matching
//! - `@article` maps to journal papers, everything else to conference papers
//! - Malformed entries are skipped and reported, never fatal
//! - Formatting publications back to parser-compatible BibTeX

mod entry;
mod formatter;
pub mod parser;

pub use entry::BibEntryType;
pub use formatter::{format_publication, format_publications};
pub use parser::{parse, parse_report, ParseReport, SkipReason, SkippedEntry, ID_PREFIX};
