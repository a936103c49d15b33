//! Row resource loader — concurrent per-row document loading.
//!
//! DESIGN
//! ======
//! Each `load_one` call is one linear async flow: show the loading
//! placeholder, wait for the source, render. The loader keeps one entry per
//! row in flight: a monotonically increasing token plus an abort signal.
//!
//! Starting a load for a row replaces that row's entry. The replaced entry's
//! abort sender is dropped, which wakes the older flow at its response
//! boundary and it returns `Cancelled` without touching the container. A
//! response that races past the abort still has to match the row's current
//! token before it may render; the token check and the container write happen
//! under the same lock, so a stale result can never overwrite a newer one.
//!
//! No await point is held under the lock. A `load_one` future dropped before
//! it settles releases its entry through `Registration`, so `in_flight`
//! only ever counts loads that can still finish.
//!
//! ERROR HANDLING
//! ==============
//! Failures stay inside the row: transport and status errors render the
//! localized error placeholder and are logged; cancellations are silent.
//! `load_all` joins every row with a settle-all join and never fails.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use futures::future::join_all;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::documents::{ResourceItem, RowId};
use crate::i18n::Language;
use crate::page::{ContainerState, Row};
use crate::render;
use crate::role::Role;
use crate::source::{DocumentSource, SourceError};

// =============================================================================
// OUTCOMES
// =============================================================================

/// How a single row load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row now shows `count` documents.
    Rendered { count: usize },
    /// The row now shows the "no documents" placeholder.
    Empty,
    /// The row now shows the error placeholder.
    Failed,
    /// A newer load for the same row superseded this one; nothing was written.
    Cancelled,
}

/// Per-outcome counts for one `load_all` batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rendered: usize,
    pub empty: usize,
    pub failed: usize,
    pub cancelled: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Rendered { .. } => self.rendered += 1,
            RowOutcome::Empty => self.empty += 1,
            RowOutcome::Failed => self.failed += 1,
            RowOutcome::Cancelled => self.cancelled += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rendered + self.empty + self.failed + self.cancelled
    }
}

// =============================================================================
// LOADER
// =============================================================================

struct InFlight {
    token: u64,
    /// Dropping this sender aborts the owning load.
    _abort: oneshot::Sender<()>,
}

#[derive(Default)]
struct Tokens {
    next: u64,
    rows: HashMap<RowId, InFlight>,
}

impl Tokens {
    /// Remove the row's entry if `token` still owns it.
    fn release(&mut self, row_id: RowId, token: u64) -> bool {
        let owns_row = self.rows.get(&row_id).is_some_and(|current| current.token == token);
        if owns_row {
            self.rows.remove(&row_id);
        }
        owns_row
    }
}

/// Releases a load's entry when its `load_one` future is dropped early.
///
/// After `finish` the entry is already gone (or owned by a newer token), so
/// the release on drop is a no-op.
struct Registration<'a> {
    tokens: &'a Mutex<Tokens>,
    row_id: RowId,
    token: u64,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        let mut tokens = self.tokens.lock().unwrap_or_else(PoisonError::into_inner);
        if tokens.release(self.row_id, self.token) {
            debug!(row_id = self.row_id, token = self.token, "document load dropped before settling");
        }
    }
}

/// Loads and renders document lists for page rows.
///
/// Construct one per page view and pass it to whatever needs to (re)load rows.
pub struct RowResourceLoader<S> {
    source: S,
    lang: Language,
    tokens: Mutex<Tokens>,
}

impl<S: DocumentSource> RowResourceLoader<S> {
    #[must_use]
    pub fn new(source: S, lang: Language) -> Self {
        Self { source, lang, tokens: Mutex::new(Tokens::default()) }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of rows with a load currently in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.lock_tokens().rows.len()
    }

    /// Load every row concurrently. One row's failure never affects another.
    pub async fn load_all(&self, rows: &[Row], role: &Role) -> BatchSummary {
        let outcomes = join_all(rows.iter().map(|row| self.load_one(row, role))).await;

        let mut summary = BatchSummary::default();
        for outcome in outcomes {
            summary.record(outcome);
        }
        info!(
            rows = rows.len(),
            rendered = summary.rendered,
            empty = summary.empty,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "document batch settled"
        );
        summary
    }

    /// Load one row, superseding any load already in flight for it.
    pub async fn load_one(&self, row: &Row, role: &Role) -> RowOutcome {
        let (token, mut abort) = self.begin(row);
        let _registration = Registration { tokens: &self.tokens, row_id: row.id, token };

        let result = tokio::select! {
            biased;
            _ = &mut abort => {
                debug!(row_id = row.id, token, "document load superseded before response");
                return RowOutcome::Cancelled;
            }
            result = self.source.fetch_documents(row.id) => result,
        };

        self.finish(row, role, token, result)
    }

    /// Register a new token for the row, abort the previous one and show the
    /// loading placeholder.
    fn begin(&self, row: &Row) -> (u64, oneshot::Receiver<()>) {
        let (abort_tx, abort_rx) = oneshot::channel();
        let mut tokens = self.lock_tokens();
        tokens.next += 1;
        let token = tokens.next;

        if let Some(previous) = tokens.rows.insert(row.id, InFlight { token, _abort: abort_tx }) {
            debug!(row_id = row.id, previous = previous.token, token, "cancelling in-flight document load");
        }
        row.container.replace(render::loading_markup(self.lang));
        (token, abort_rx)
    }

    /// Render the result if `token` still owns the row.
    fn finish(
        &self,
        row: &Row,
        role: &Role,
        token: u64,
        result: Result<Vec<ResourceItem>, SourceError>,
    ) -> RowOutcome {
        let mut tokens = self.lock_tokens();
        if !tokens.release(row.id, token) {
            debug!(row_id = row.id, token, "discarding stale document response");
            return RowOutcome::Cancelled;
        }

        match result {
            Ok(items) => match render::render(&row.container, &items, role, self.lang) {
                ContainerState::Empty => RowOutcome::Empty,
                _ => RowOutcome::Rendered { count: items.len() },
            },
            Err(e) => {
                warn!(row_id = row.id, kind = e.kind(), error = %e, "error loading documents");
                row.container.replace(render::error_markup(self.lang));
                RowOutcome::Failed
            }
        }
    }

    fn lock_tokens(&self) -> std::sync::MutexGuard<'_, Tokens> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
