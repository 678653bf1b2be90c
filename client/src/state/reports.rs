//! Report collection state backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `reports` crate store so components read render-ready summaries
//! and details while all mutations still flow through [`ReportStore`].

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use reports::{
    Category, Clock, DEFAULT_STORAGE_KEY, ReportDetail, ReportStore, ReportSummary, Stats, Storage,
};

use crate::util::browser_clock::BrowserClock;
use crate::util::storage::BrowserStorage;

/// The report store plus whether it has been restored from storage yet.
#[derive(Debug)]
pub struct ReportsState<S = BrowserStorage, C = BrowserClock> {
    pub store: ReportStore<S, C>,
    /// False until the browser has read `localStorage`.
    pub restored: bool,
}

impl Default for ReportsState {
    fn default() -> Self {
        Self::new(ReportStore::unloaded(BrowserStorage, BrowserClock, DEFAULT_STORAGE_KEY))
    }
}

impl<S: Storage, C: Clock> ReportsState<S, C> {
    #[must_use]
    pub fn new(store: ReportStore<S, C>) -> Self {
        Self { store, restored: false }
    }

    /// Read the persisted collection. Safe to call again; later calls reload.
    pub fn restore(&mut self) {
        self.store.reload();
        self.restored = true;
    }

    /// Gallery cards in store order.
    #[must_use]
    pub fn summaries(&self, filter: Option<Category>) -> Vec<ReportSummary> {
        self.store.list(filter).map(ReportSummary::from).collect()
    }

    #[must_use]
    pub fn detail(&self, id: u64) -> Option<ReportDetail> {
        self.store.get(id).map(ReportDetail::from)
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.store.stats()
    }
}
