//! anolis-errata - Errata collector for Anolis OS
//!
//! This library ingests the Anolis vulnerability advisory corpus from two
//! remote sources - the aggregate OVAL definitions document and per-advisory
//! CSAF detail records - and materializes it as a year-partitioned local
//! vulnerability list.
//!
//! # Architecture
//!
//! The library follows a hexagonal layout:
//!
//! - **Core** (`errata_sync`): domain models and the ingestion services
//! - **Application Layer** (`application`): the sync use case and its DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use anolis_errata::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = SyncConfig::default();
//! let transport = HttpTransport::new()?;
//! let writer = JsonCollectionWriter::new();
//! let observer = StderrObserver::new(false);
//!
//! let use_case = SyncErrataUseCase::new(config, transport, writer, observer);
//! let report = use_case.run()?;
//! println!("persisted {} errata", report.total_persisted());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod errata_sync;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrObserver;
    pub use crate::adapters::outbound::filesystem::JsonCollectionWriter;
    pub use crate::adapters::outbound::network::HttpTransport;
    pub use crate::application::dto::{SkippedItem, SyncReport, YearOutcome};
    pub use crate::application::use_cases::SyncErrataUseCase;
    pub use crate::cli::Args;
    pub use crate::config::SyncConfig;
    pub use crate::errata_sync::domain::{
        build_year_index, normalize_ref_id, Definition, Errata, OvalDefinitions, YearIndex,
    };
    pub use crate::errata_sync::services::ErrataFetcher;
    pub use crate::ports::outbound::{CollectionWriter, HttpResponse, SyncObserver, Transport};
    pub use crate::shared::error::{ExitCode, FetchError, SyncError};
    pub use crate::shared::Result;
}
