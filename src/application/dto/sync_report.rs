use crate::shared::error::FetchError;

/// A ref-ID that could not be materialized, with the reason it was
/// skipped. Collected instead of only logged so callers and tests can
/// assert on skip reasons.
#[derive(Debug, Clone)]
pub struct SkippedItem {
    pub ref_id: String,
    pub reason: FetchError,
}

/// Outcome of assembling one year's collection.
#[derive(Debug, Clone)]
pub struct YearOutcome {
    pub year: String,
    /// Number of errata records persisted for this year. Zero is a
    /// valid terminal state - the empty collection is still written.
    pub persisted: usize,
    pub skipped: Vec<SkippedItem>,
}

/// Aggregated result of a full sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Definitions found in the aggregate OVAL document.
    pub definition_count: usize,
    pub years: Vec<YearOutcome>,
}

impl SyncReport {
    pub fn total_persisted(&self) -> usize {
        self.years.iter().map(|y| y.persisted).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.years.iter().map(|y| y.skipped.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let report = SyncReport {
            definition_count: 3,
            years: vec![
                YearOutcome {
                    year: "2023".to_string(),
                    persisted: 2,
                    skipped: vec![],
                },
                YearOutcome {
                    year: "2024".to_string(),
                    persisted: 0,
                    skipped: vec![SkippedItem {
                        ref_id: "ANSA:2024:5678".to_string(),
                        reason: FetchError::UnexpectedStatus { status: 404 },
                    }],
                },
            ],
        };

        assert_eq!(report.total_persisted(), 2);
        assert_eq!(report.total_skipped(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = SyncReport::default();
        assert_eq!(report.total_persisted(), 0);
        assert_eq!(report.total_skipped(), 0);
        assert!(report.years.is_empty());
    }
}
