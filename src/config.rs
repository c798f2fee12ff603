//! Run configuration for the errata sync pipeline.
//!
//! Defaults point at the well-known Anolis endpoints; everything is
//! overridable from the CLI at construction time.

use std::path::PathBuf;

/// Well-known URL of the aggregate OVAL definitions document.
pub const OVAL_URL: &str = "https://anas.openanolis.cn/api/data/OVAL/anolis-8.oval.xml";

/// Base URL of the CSAF advisory detail endpoint; records live at
/// `<base>/<normalized-ref-id>.json`.
pub const CSAF_BASE_URL: &str = "https://anas.openanolis.cn/api/data/CSAF/advisories";

/// Retry budget for the aggregate document fetch. Detail fetches are
/// single-attempt by design.
pub const DEFAULT_RETRY: u32 = 5;

/// Subdirectory of the vulnerability list that holds this distribution.
pub const DISTRIBUTION_DIR: &str = "anolis";

/// File name of a persisted year collection.
pub const ERRATA_FILE_NAME: &str = "errata.json";

/// Configuration handed to the sync use case at construction time.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Root directory of the persisted vulnerability list.
    pub vuln_list_dir: PathBuf,
    pub oval_url: String,
    pub csaf_base_url: String,
    pub retry: u32,
}

impl SyncConfig {
    /// Directory that receives the year subdirectories.
    pub fn distribution_dir(&self) -> PathBuf {
        self.vuln_list_dir.join(DISTRIBUTION_DIR)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            vuln_list_dir: PathBuf::from("vuln-list"),
            oval_url: OVAL_URL.to_string(),
            csaf_base_url: CSAF_BASE_URL.to_string(),
            retry: DEFAULT_RETRY,
        }
    }
}
