use crate::errata_sync::domain::errata::Errata;
use crate::ports::outbound::CollectionWriter;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// JsonCollectionWriter adapter for the year-partitioned on-disk layout.
///
/// Writes each year's collection as pretty-printed JSON at
/// `<base_dir>/<year>/<file_name>`, creating directories on demand and
/// replacing any prior file at that path.
pub struct JsonCollectionWriter;

impl JsonCollectionWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonCollectionWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionWriter for JsonCollectionWriter {
    fn write_collection(
        &self,
        base_dir: &Path,
        year: &str,
        file_name: &str,
        records: &[Errata],
    ) -> Result<()> {
        let dir = base_dir.join(year);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let path = dir.join(file_name);
        let json = serde_json::to_vec_pretty(records)
            .with_context(|| format!("Failed to serialize the errata collection for {}", year))?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}
