//! labsite - lab site content tools
//!
//! Parses bibliographies, runs the publication query engine over a content
//! directory, checks content links, and writes project reports.

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use labsite_core::{
    site_config, ContentStore, ListState, LoadSession, QueryParams, SortKey, SortOrder,
    TypeFilter, YearFilter,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name looked up under the user config directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "labsite/site.toml";

#[derive(Parser, Debug)]
#[command(name = "labsite")]
#[command(about = "Lab site content tools", version)]
struct Cli {
    /// Site config (TOML). Defaults to labsite/site.toml in the user config directory
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct RootArg {
    /// Content directory
    #[arg(long, default_value = "content", value_name = "DIR")]
    root: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a bibliography file and print the publications as JSON
    ParseBib {
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
    },

    /// Search, filter, and sort the publication list
    Publications {
        #[command(flatten)]
        root: RootArg,
        /// Read publications.bib instead of publications.json
        #[arg(long)]
        bib: bool,
        #[arg(long, default_value = "")]
        search: String,
        /// all, journal, conference, workshop, or preprint
        #[arg(long = "type", default_value = "all")]
        kind: String,
        /// A year, or "all"
        #[arg(long, default_value = "all")]
        year: String,
        #[arg(long, default_value = "year")]
        sort: SortKey,
        /// asc or desc; defaults to newest first for year, A-Z for title
        #[arg(long)]
        order: Option<SortOrder>,
    },

    /// Print publications.json as BibTeX
    ExportBib {
        #[command(flatten)]
        root: RootArg,
    },

    /// Report profiles referenced by the people index or project teams that do not exist
    Check {
        #[command(flatten)]
        root: RootArg,
    },

    /// Write a Markdown report of all projects
    Report {
        #[command(flatten)]
        root: RootArg,
        /// Output file; stdout when omitted
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Print the site footer from the site config
    Footer,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Some(path) = &cli.config {
        site_config::load_and_init(path)?;
    }

    match cli.command {
        Command::ParseBib { file, pretty } => parse_bib(&file, pretty),
        Command::Publications {
            root,
            bib,
            search,
            kind,
            year,
            sort,
            order,
        } => {
            let params = QueryParams::new()
                .with_search(search)
                .with_type(type_filter(&kind))
                .with_year(YearFilter::parse(&year))
                .with_sort(sort, order);
            publications(&ContentStore::new(root.root), bib, &params)
        }
        Command::ExportBib { root } => {
            let publications = ContentStore::new(root.root).publications()?;
            println!("{}", labsite_bibtex::format_publications(&publications));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { root } => check(&ContentStore::new(root.root)),
        Command::Report { root, out } => {
            let report = ContentStore::new(root.root).project_report()?;
            match out {
                Some(path) => {
                    fs::write(&path, report)?;
                    info!(path = %path.display(), "Wrote project report");
                }
                None => print!("{}", report),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Footer => footer(),
    }
}

fn parse_bib(file: &Path, pretty: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(file)?;
    let report = labsite_bibtex::parse_report(&text);
    info!(
        parsed = report.publications.len(),
        skipped = report.skipped.len(),
        "Parsed {}",
        file.display()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&report.publications)?
    } else {
        serde_json::to_string(&report.publications)?
    };
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

/// Unknown types mean no type filter
fn type_filter(value: &str) -> TypeFilter {
    value.parse().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring type filter");
        TypeFilter::All
    })
}

fn publications(
    store: &ContentStore,
    bib: bool,
    params: &QueryParams,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut session = LoadSession::new();
    let ticket = session.begin_load();
    let loaded = if bib {
        store.publications_from_bibtex()
    } else {
        store.publications()
    };
    session.complete_load(ticket, loaded);

    let state = session.query(params);
    println!("{}", render::list_state(&state));

    Ok(match state {
        ListState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn check(store: &ContentStore) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let missing = store.check_links()?;
    if missing.is_empty() {
        println!("All content links resolve.");
        return Ok(ExitCode::SUCCESS);
    }

    for link in &missing {
        println!("missing: {}", link);
    }
    println!("{} missing item(s)", missing.len());
    Ok(ExitCode::FAILURE)
}

fn footer() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match site_config::get() {
        Ok(config) => config,
        Err(_) => {
            let path = dirs::config_dir()
                .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
                .ok_or("no --config given and no user config directory")?;
            site_config::load_and_init(&path)?
        }
    };

    for line in config.footer_lines(chrono::Local::now().year()) {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}
