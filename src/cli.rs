use crate::config::{self, SyncConfig};
use clap::Parser;
use std::path::PathBuf;

/// Fetch Anolis OS OVAL definitions and CSAF errata into a
/// year-partitioned vulnerability list
#[derive(Parser, Debug)]
#[command(name = "anolis-errata", version, about)]
pub struct Args {
    /// Root directory of the persisted vulnerability list
    #[arg(short, long, default_value = "vuln-list")]
    pub output_dir: PathBuf,

    /// URL of the aggregate OVAL definitions document
    #[arg(long, default_value = config::OVAL_URL)]
    pub oval_url: String,

    /// Base URL of the CSAF advisory detail endpoint
    #[arg(long, default_value = config::CSAF_BASE_URL)]
    pub csaf_url: String,

    /// Retry budget for the aggregate document fetch
    #[arg(long, default_value_t = config::DEFAULT_RETRY)]
    pub retry: u32,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the run configuration from the parsed arguments.
    pub fn to_config(&self) -> SyncConfig {
        SyncConfig {
            vuln_list_dir: self.output_dir.clone(),
            oval_url: self.oval_url.clone(),
            csaf_base_url: self.csaf_url.clone(),
            retry: self.retry,
        }
    }
}
