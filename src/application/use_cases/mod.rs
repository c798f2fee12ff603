pub mod sync_errata;

pub use sync_errata::SyncErrataUseCase;
