use crate::errata_sync::domain::errata::Errata;
use crate::shared::Result;
use std::path::Path;

/// CollectionWriter port for persisting one year's errata collection.
///
/// This port abstracts the storage backend used to materialize the
/// year-partitioned vulnerability list.
pub trait CollectionWriter {
    /// Persists `records` as the complete collection for `year` under
    /// `base_dir/year/file_name`, replacing any prior content at that
    /// path (full-replace semantics, not append/merge).
    ///
    /// An empty `records` slice is a valid collection and must still be
    /// written: "no errata fetched for this year" is a persisted
    /// terminal state.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be serialized or
    /// stored.
    fn write_collection(
        &self,
        base_dir: &Path,
        year: &str,
        file_name: &str,
        records: &[Errata],
    ) -> Result<()>;
}
