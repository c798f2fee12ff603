use crate::application::dto::{SkippedItem, SyncReport, YearOutcome};
use crate::config::{SyncConfig, ERRATA_FILE_NAME};
use crate::errata_sync::domain::{build_year_index, oval};
use crate::errata_sync::services::ErrataFetcher;
use crate::ports::outbound::{CollectionWriter, SyncObserver, Transport};
use crate::shared::error::SyncError;
use crate::shared::Result;
use anyhow::Context;

/// SyncErrataUseCase - Core use case for the ingestion pipeline
///
/// Drives the full sequence: fetch the aggregate OVAL document, parse
/// it, derive the year index, then assemble and persist one collection
/// per year. All infrastructure is injected through ports.
///
/// # Type Parameters
/// * `T` - Transport implementation
/// * `W` - CollectionWriter implementation
/// * `O` - SyncObserver implementation
pub struct SyncErrataUseCase<T, W, O> {
    config: SyncConfig,
    transport: T,
    writer: W,
    observer: O,
}

impl<T, W, O> SyncErrataUseCase<T, W, O>
where
    T: Transport,
    W: CollectionWriter,
    O: SyncObserver,
{
    /// Creates a new SyncErrataUseCase with injected dependencies
    pub fn new(config: SyncConfig, transport: T, writer: W, observer: O) -> Self {
        Self {
            config,
            transport,
            writer,
            observer,
        }
    }

    /// Executes a full sync run.
    ///
    /// Only two failures abort the run: an unusable aggregate document
    /// and a persistence failure for some year's collection. Individual
    /// errata fetch failures are absorbed per year (see
    /// [`assemble_year`](Self::assemble_year)) and surface in the
    /// returned report, not as errors.
    pub fn run(&self) -> Result<SyncReport> {
        let raw = self
            .transport
            .fetch_with_retry(&self.config.oval_url, self.config.retry)
            .with_context(|| {
                format!(
                    "Failed to fetch the OVAL document from {}",
                    self.config.oval_url
                )
            })?;

        let oval = oval::parse(&raw)?;
        let definitions = oval.definitions.definitions;
        self.observer.on_run_started(definitions.len());

        let index = build_year_index(&definitions);

        let mut years = Vec::with_capacity(index.len());
        for (year, ref_ids) in &index {
            // First persistence failure aborts the run; remaining years
            // are not attempted and earlier years are not rolled back.
            years.push(self.assemble_year(year, ref_ids)?);
        }

        Ok(SyncReport {
            definition_count: definitions.len(),
            years,
        })
    }

    /// Assembles and persists the collection for one year.
    ///
    /// Fetches every ref-ID in order; a failed fetch is reported and
    /// skipped, never aborting the year. Successful records are
    /// persisted in fetch order. A year with zero successes still
    /// writes an empty collection. The error return is reserved for
    /// the persistence step.
    fn assemble_year(&self, year: &str, ref_ids: &[String]) -> Result<YearOutcome> {
        self.observer.on_year_started(year, ref_ids.len());

        let fetcher = ErrataFetcher::new(&self.transport, &self.config.csaf_base_url);
        let mut collection = Vec::new();
        let mut skipped = Vec::new();

        for ref_id in ref_ids {
            match fetcher.fetch(ref_id) {
                Ok(errata) => {
                    self.observer.on_item_fetched(ref_id);
                    collection.push(errata);
                }
                Err(reason) => {
                    self.observer.on_item_skipped(ref_id, &reason);
                    skipped.push(SkippedItem {
                        ref_id: ref_id.clone(),
                        reason,
                    });
                }
            }
        }

        self.writer
            .write_collection(
                &self.config.distribution_dir(),
                year,
                ERRATA_FILE_NAME,
                &collection,
            )
            .map_err(|e| SyncError::Persistence {
                year: year.to_string(),
                details: e.to_string(),
            })?;
        self.observer.on_year_persisted(year, collection.len());

        Ok(YearOutcome {
            year: year.to_string(),
            persisted: collection.len(),
            skipped,
        })
    }
}
