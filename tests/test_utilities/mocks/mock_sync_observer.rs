use anolis_errata::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SyncObserver for testing
///
/// Captures every observability callback so tests can assert on skip
/// reasons and persistence notifications without scraping stderr.
/// Cloning shares the captured state.
#[derive(Clone, Default)]
pub struct MockSyncObserver {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    run_started: Mutex<Vec<usize>>,
    skipped: Mutex<Vec<(String, FetchError)>>,
    persisted: Mutex<Vec<(String, usize)>>,
}

impl MockSyncObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run_started(&self) -> Vec<usize> {
        self.inner.run_started.lock().unwrap().clone()
    }

    pub fn skipped(&self) -> Vec<(String, FetchError)> {
        self.inner.skipped.lock().unwrap().clone()
    }

    pub fn persisted(&self) -> Vec<(String, usize)> {
        self.inner.persisted.lock().unwrap().clone()
    }
}

impl SyncObserver for MockSyncObserver {
    fn on_run_started(&self, definition_count: usize) {
        self.inner
            .run_started
            .lock()
            .unwrap()
            .push(definition_count);
    }

    fn on_item_skipped(&self, ref_id: &str, reason: &FetchError) {
        self.inner
            .skipped
            .lock()
            .unwrap()
            .push((ref_id.to_string(), reason.clone()));
    }

    fn on_year_persisted(&self, year: &str, count: usize) {
        self.inner
            .persisted
            .lock()
            .unwrap()
            .push((year.to_string(), count));
    }
}
