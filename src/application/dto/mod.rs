pub mod sync_report;

pub use sync_report::{SkippedItem, SyncReport, YearOutcome};
