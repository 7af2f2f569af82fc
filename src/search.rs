//! Catalog Search State
//!
//! Debounced search with a request generation guard: every keystroke bumps
//! the generation, and only the latest ticket may issue a request or apply
//! its results.

use crate::models::CatalogGame;

/// Pause after the last keystroke before querying the catalog
pub const SEARCH_DEBOUNCE_MS: u32 = 350;

/// Handle for one issued query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    generation: u64,
    pub query: String,
    pub results: Vec<CatalogGame>,
    pub loading: bool,
    pub open: bool,
    pub error: Option<String>,
}

impl SearchState {
    /// Record new input. Returns a ticket unless the query is blank, in
    /// which case results are cleared and in-flight requests invalidated.
    pub fn begin(&mut self, input: &str) -> Option<SearchTicket> {
        self.generation += 1;
        self.query = input.to_string();
        self.error = None;

        let query = input.trim();
        if query.is_empty() {
            self.results.clear();
            self.loading = false;
            self.open = false;
            return None;
        }

        self.loading = true;
        self.open = true;
        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// No newer input has arrived since the ticket was issued
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a finished request. Stale completions are dropped and
    /// reported as `false`.
    pub fn complete(&mut self, ticket: &SearchTicket, result: Result<Vec<CatalogGame>, String>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("[SEARCH] dropping stale results for {:?}", ticket.query);
            return false;
        }
        self.loading = false;
        match result {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e);
            }
        }
        true
    }

    /// Reopen the dropdown on focus if there is something to show
    pub fn focus(&mut self) {
        self.open = !self.query.trim().is_empty();
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
