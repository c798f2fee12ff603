use crate::shared::error::FetchError;

/// SyncObserver port for reporting sync progress.
///
/// Keeps the pipeline a pure function of its inputs plus collaborators:
/// observability is injected rather than written to a global logger, so
/// tests can assert on skip events instead of capturing output.
pub trait SyncObserver {
    /// Called once after the aggregate document has been parsed.
    fn on_run_started(&self, definition_count: usize) {
        let _ = definition_count;
    }

    /// Called before a year's assembly begins.
    fn on_year_started(&self, year: &str, ref_id_count: usize) {
        let _ = (year, ref_id_count);
    }

    /// Called after each successfully fetched errata record.
    fn on_item_fetched(&self, ref_id: &str) {
        let _ = ref_id;
    }

    /// Called when an errata fetch fails and the ref-ID is skipped.
    fn on_item_skipped(&self, ref_id: &str, reason: &FetchError);

    /// Called after a year's collection has been persisted.
    fn on_year_persisted(&self, year: &str, count: usize);
}
