//! Publication load sessions
//!
//! Loads may be started repeatedly and finish out of order. Each load gets
//! a [`LoadTicket`]; only the most recently issued ticket can change the
//! session, so a slow earlier load never overwrites a newer one.

use std::fmt::Display;
use std::sync::Arc;

use labsite_domain::Publication;
use tracing::{debug, info, warn};

use crate::filter::{query, ListState, QueryParams};

/// Handle for one started load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started; the result was discarded
    Stale,
}

#[derive(Debug, Default)]
pub struct LoadSession {
    generation: u64,
    pending: bool,
    publications: Option<Arc<[Publication]>>,
    error: Option<String>,
}

impl LoadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending = true;
        debug!(generation = self.generation, "Publication load started");
        LoadTicket(self.generation)
    }

    pub fn complete_load<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Publication>, E>,
    ) -> LoadOutcome {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding stale publication load"
            );
            return LoadOutcome::Stale;
        }

        self.pending = false;
        match result {
            Ok(publications) => {
                info!(count = publications.len(), "Publications loaded");
                self.publications = Some(publications.into());
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Publication load failed");
                self.error = Some(e.to_string());
            }
        }
        LoadOutcome::Applied
    }

    /// The current list, shared with any caller holding it
    pub fn publications(&self) -> Option<Arc<[Publication]>> {
        self.publications.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// What the list should show for `params`.
    ///
    /// A failed load is reported until the next load completes; before any
    /// list arrives the state is `Loading`.
    pub fn query(&self, params: &QueryParams) -> ListState<'_> {
        if !self.pending {
            if let Some(error) = &self.error {
                return ListState::Failed(error.clone());
            }
        }
        match &self.publications {
            Some(publications) => ListState::from_outcome(query(publications, params)),
            None => ListState::Loading,
        }
    }
}
