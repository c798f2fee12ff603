use anolis_errata::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A persisted collection captured by [`MockCollectionWriter`].
#[derive(Clone)]
pub struct RecordedWrite {
    pub base_dir: PathBuf,
    pub year: String,
    pub file_name: String,
    pub tracking_ids: Vec<String>,
}

/// Mock CollectionWriter for testing
///
/// Records every persisted collection; optionally fails for one year
/// to exercise the abort-on-persistence-failure rule. Cloning shares
/// the recorded state.
#[derive(Clone, Default)]
pub struct MockCollectionWriter {
    writes: Arc<Mutex<Vec<RecordedWrite>>>,
    fail_on_year: Option<String>,
}

impl MockCollectionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(year: &str) -> Self {
        Self {
            fail_on_year: Some(year.to_string()),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl CollectionWriter for MockCollectionWriter {
    fn write_collection(
        &self,
        base_dir: &Path,
        year: &str,
        file_name: &str,
        records: &[Errata],
    ) -> Result<()> {
        if self.fail_on_year.as_deref() == Some(year) {
            anyhow::bail!("mock persistence failure for year {}", year);
        }

        self.writes.lock().unwrap().push(RecordedWrite {
            base_dir: base_dir.to_path_buf(),
            year: year.to_string(),
            file_name: file_name.to_string(),
            tracking_ids: records
                .iter()
                .map(|r| r.document.tracking.id.clone())
                .collect(),
        });
        Ok(())
    }
}
